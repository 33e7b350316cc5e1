//! Store context.
//!
//! One configuration section: where a store lives, which identity encrypts
//! it and how it syncs. The on-disk layout of a section is described by
//! [`SCHEMA`], an explicit ordered field list.

use std::path::PathBuf;

use crate::core::codec::Markers;
use crate::core::constants;

/// Settings of one independent store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContext {
    /// Store root directory.
    pub path: String,
    /// GPG key id used to encrypt new and modified secrets.
    pub identity: String,
    pub username_marker: String,
    pub url_marker: String,
    pub sync_enabled: bool,
    pub sync_remote: String,
    pub sync_user: String,
    pub sync_email: String,
    pub sync_branch: String,
}

impl Default for StoreContext {
    fn default() -> Self {
        let mut ctx = Self {
            path: String::new(),
            identity: String::new(),
            username_marker: String::new(),
            url_marker: String::new(),
            sync_enabled: false,
            sync_remote: String::new(),
            sync_user: String::new(),
            sync_email: String::new(),
            sync_branch: String::new(),
        };
        for field in SCHEMA {
            field.write(&mut ctx, field.default);
        }
        ctx
    }
}

impl StoreContext {
    /// Store root as a path.
    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    /// Line markers used by the record codec.
    pub fn markers(&self) -> Markers {
        Markers::new(&self.username_marker, &self.url_marker)
    }
}

/// How a field is stored in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Read and written verbatim.
    Text,
    /// `True` / `False`; anything but an exact `True` reads as false.
    Flag,
}

/// One persisted field of a [`StoreContext`].
pub struct Field {
    /// Key in the configuration section.
    pub key: &'static str,
    pub kind: FieldKind,
    /// Raw default value, as it would appear in the file.
    pub default: &'static str,
    get: fn(&StoreContext) -> String,
    set: fn(&mut StoreContext, String),
}

impl Field {
    /// Raw value of this field in `ctx`.
    pub fn read(&self, ctx: &StoreContext) -> String {
        (self.get)(ctx)
    }

    /// Assign a raw value to this field in `ctx`.
    pub fn write(&self, ctx: &mut StoreContext, raw: &str) {
        (self.set)(ctx, raw.to_string())
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .finish()
    }
}

fn flag_to_raw(value: bool) -> String {
    if value {
        constants::TRUE_TOKEN.to_string()
    } else {
        constants::FALSE_TOKEN.to_string()
    }
}

fn raw_to_flag(raw: &str) -> bool {
    raw == constants::TRUE_TOKEN
}

/// Persisted fields, in file order.
///
/// Key names and alphabetical order match the files written by earlier
/// releases, so existing configuration files load unchanged.
pub const SCHEMA: &[Field] = &[
    Field {
        key: "gitbranch",
        kind: FieldKind::Text,
        default: constants::DEFAULT_BRANCH,
        get: |c| c.sync_branch.clone(),
        set: |c, v| c.sync_branch = v,
    },
    Field {
        key: "gitmail",
        kind: FieldKind::Text,
        default: "",
        get: |c| c.sync_email.clone(),
        set: |c, v| c.sync_email = v,
    },
    Field {
        key: "gitrepo",
        kind: FieldKind::Text,
        default: "",
        get: |c| c.sync_remote.clone(),
        set: |c, v| c.sync_remote = v,
    },
    Field {
        key: "gituser",
        kind: FieldKind::Text,
        default: "",
        get: |c| c.sync_user.clone(),
        set: |c, v| c.sync_user = v,
    },
    Field {
        key: "identity",
        kind: FieldKind::Text,
        default: "",
        get: |c| c.identity.clone(),
        set: |c, v| c.identity = v,
    },
    Field {
        key: "path",
        kind: FieldKind::Text,
        default: "",
        get: |c| c.path.clone(),
        set: |c, v| c.path = v,
    },
    Field {
        key: "sep_url",
        kind: FieldKind::Text,
        default: constants::DEFAULT_URL_MARKER,
        get: |c| c.url_marker.clone(),
        set: |c, v| c.url_marker = v,
    },
    Field {
        key: "sep_username",
        kind: FieldKind::Text,
        default: constants::DEFAULT_USERNAME_MARKER,
        get: |c| c.username_marker.clone(),
        set: |c, v| c.username_marker = v,
    },
    Field {
        key: "usegit",
        kind: FieldKind::Flag,
        default: constants::FALSE_TOKEN,
        get: |c| flag_to_raw(c.sync_enabled),
        set: |c, v| c.sync_enabled = raw_to_flag(&v),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_uses_schema_defaults() {
        let ctx = StoreContext::default();
        assert_eq!(ctx.sync_branch, "main");
        assert_eq!(ctx.username_marker, "└─ USERNAME :: ");
        assert_eq!(ctx.url_marker, "└─ URL      :: ");
        assert!(!ctx.sync_enabled);
        assert!(ctx.path.is_empty());
    }

    #[test]
    fn test_flag_requires_exact_true_token() {
        let field = SCHEMA.iter().find(|f| f.key == "usegit").unwrap();
        let mut ctx = StoreContext::default();
        field.write(&mut ctx, "True");
        assert!(ctx.sync_enabled);
        field.write(&mut ctx, "true");
        assert!(!ctx.sync_enabled);
        field.write(&mut ctx, "yes");
        assert!(!ctx.sync_enabled);
    }

    #[test]
    fn test_every_field_reads_back_what_it_wrote() {
        let mut ctx = StoreContext::default();
        for field in SCHEMA {
            let raw = match field.kind {
                FieldKind::Text => format!("value-of-{}", field.key),
                FieldKind::Flag => "True".to_string(),
            };
            field.write(&mut ctx, &raw);
            assert_eq!(field.read(&ctx), raw, "field {}", field.key);
        }
    }

    #[test]
    fn test_schema_keys_are_sorted_and_unique() {
        let keys: Vec<&str> = SCHEMA.iter().map(|f| f.key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }
}
