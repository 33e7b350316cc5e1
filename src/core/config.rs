//! Configuration store.
//!
//! One file (`~/.pouchrc`) describes every store context, one section per
//! context. Fields are read and written through the explicit
//! [`SCHEMA`](crate::core::domain::SCHEMA); the `[DEFAULT]` section holds
//! bootstrap values inherited by every other section.

pub mod ini;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::{self, DEFAULT_SECTION};
use crate::core::domain::{StoreContext, SCHEMA};
use crate::error::{ConfigError, Result, ValidationError};

pub use ini::IniDocument;

/// Configuration file location.
///
/// # Errors
///
/// `ConfigError::NoHome` when neither `POUCH_CONFIG` nor a home directory
/// is available.
pub fn locate() -> Result<PathBuf> {
    constants::config_path().ok_or_else(|| ConfigError::NoHome.into())
}

fn read_document(path: &Path) -> Result<IniDocument> {
    if !path.exists() {
        return Ok(IniDocument::default());
    }
    let contents = fs::read_to_string(path)?;
    IniDocument::parse(&contents)
}

fn write_document(path: &Path, doc: &IniDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
    }
    fs::write(path, doc.render()).map_err(ConfigError::Write)?;

    // The file names key ids and remotes; keep it private (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(ConfigError::Write)?;
    }

    Ok(())
}

fn write_fields(doc: &mut IniDocument, section: &str, ctx: &StoreContext) {
    for field in SCHEMA {
        doc.set(section, field.key, &field.read(ctx));
    }
}

/// Create the configuration file with a `[DEFAULT]` section if it does not
/// exist yet.
///
/// Returns true when the file was created.
pub fn bootstrap(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    debug!(path = %path.display(), "bootstrapping config");
    let mut doc = IniDocument::default();
    write_fields(&mut doc, DEFAULT_SECTION, &StoreContext::default());
    write_document(path, &doc)?;
    Ok(true)
}

/// Load the context stored in `section`.
///
/// Keys missing from the section are inherited from `[DEFAULT]`, then from
/// the schema defaults.
///
/// # Errors
///
/// Every failure (missing file, missing section, unreadable or malformed
/// file) is reported as `ConfigError::LoadFailed`; the cause is logged.
pub fn load(path: &Path, section: &str) -> Result<StoreContext> {
    let failed = || -> crate::error::Error {
        ConfigError::LoadFailed {
            section: section.to_string(),
        }
        .into()
    };

    if !path.exists() {
        debug!(path = %path.display(), "config file missing");
        return Err(failed());
    }
    let doc = match read_document(path) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(error = %e, "config file unreadable");
            return Err(failed());
        }
    };
    if !doc.has_section(section) {
        debug!(section, "config section missing");
        return Err(failed());
    }

    let mut ctx = StoreContext::default();
    for field in SCHEMA {
        let raw = doc.get(section, field.key).unwrap_or(field.default);
        field.write(&mut ctx, raw);
    }

    debug!(section, path = %ctx.path, sync = ctx.sync_enabled, "context loaded");
    Ok(ctx)
}

/// Store `ctx` in `section`, creating the section if needed. Other sections
/// are kept.
///
/// # Errors
///
/// Fails if the existing file cannot be parsed or the file cannot be
/// written.
pub fn save(path: &Path, section: &str, ctx: &StoreContext) -> Result<()> {
    debug!(section, "saving context");
    let mut doc = read_document(path)?;
    write_fields(&mut doc, section, ctx);
    write_document(path, &doc)
}

/// Add a new section initialised with `defaults`.
///
/// # Errors
///
/// `ConfigError::SectionExists` if the section is present,
/// `ValidationError::InvalidName` for a blank name or the reserved
/// `DEFAULT`.
pub fn create_section(path: &Path, section: &str, defaults: &StoreContext) -> Result<()> {
    if section.trim().is_empty() || section.contains(|c: char| c == '[' || c == ']') {
        return Err(ValidationError::InvalidName {
            name: section.to_string(),
            reason: "context names cannot be blank or contain brackets".to_string(),
        }
        .into());
    }
    if section == DEFAULT_SECTION {
        return Err(ValidationError::InvalidName {
            name: section.to_string(),
            reason: "reserved for defaults".to_string(),
        }
        .into());
    }

    let mut doc = read_document(path)?;
    if !doc.add_section(section) {
        return Err(ConfigError::SectionExists(section.to_string()).into());
    }
    debug!(section, "creating section");
    write_fields(&mut doc, section, defaults);
    write_document(path, &doc)
}

/// Named sections in file order. A missing file has none.
pub fn list_sections(path: &Path) -> Result<Vec<String>> {
    Ok(read_document(path)?.section_names())
}
