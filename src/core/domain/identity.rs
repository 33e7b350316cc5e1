//! Identity type.
//!
//! A secret key available in the local keyring, as offered by `init`.

/// A secret key that can decrypt the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    key_id: String,
    fingerprint: String,
    uids: Vec<String>,
}

impl Identity {
    pub fn new(key_id: String, fingerprint: String, uids: Vec<String>) -> Self {
        Self {
            key_id,
            fingerprint,
            uids,
        }
    }

    /// Long key id (16 hex digits), the value stored in the context.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// User ids attached to the key (`Name <mail>`).
    pub fn uids(&self) -> &[String] {
        &self.uids
    }

    /// Whether `value` designates this key: key id, fingerprint, or a
    /// fingerprint suffix of at least 8 hex digits, case-insensitive.
    pub fn matches(&self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let value = value.to_uppercase();
        value == self.key_id.to_uppercase()
            || (value.len() >= 8 && self.fingerprint.to_uppercase().ends_with(&value))
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.uids.first() {
            Some(uid) => write!(f, "{} {}", self.key_id, uid),
            None => write!(f, "{}", self.key_id),
        }
    }
}
