//! Input validation for pouch operations.
//!
//! Validates password names, folder names and required field values.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, ValidationError};

/// Validate a required value and return it trimmed.
///
/// # Arguments
///
/// * `field` - Field name (for error messages)
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` if the value is blank.
pub fn validate_field(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()).into());
    }
    Ok(value.to_string())
}

/// Validate the name of a password file or folder.
///
/// Names become a single path component inside the store:
/// - Cannot be empty
/// - Cannot contain path separators
/// - Cannot start with a dot (hidden entries are never listed)
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(field: &str, name: &str) -> Result<String> {
    let name = validate_field(field, name)?;

    let invalid = |reason: &str| -> crate::error::Error {
        ValidationError::InvalidName {
            name: name.clone(),
            reason: reason.to_string(),
        }
        .into()
    };

    if name.contains('/') || name.contains('\\') {
        return Err(invalid("cannot contain path separators"));
    }
    if name.starts_with('.') {
        return Err(invalid("cannot start with a dot"));
    }

    Ok(name)
}

/// Validate a folder path relative to the store root.
///
/// An empty path is the root itself. Nested folders are allowed; absolute
/// paths, `..` and hidden components are not.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` for a path leaving the store or
/// going through a hidden directory.
pub fn validate_folder_path(folder: &str) -> Result<PathBuf> {
    let invalid = |reason: &str| -> crate::error::Error {
        ValidationError::InvalidName {
            name: folder.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    let mut relative = PathBuf::new();
    for component in Path::new(folder).components() {
        match component {
            Component::Normal(part) => {
                if part.to_string_lossy().starts_with('.') {
                    return Err(invalid("cannot contain hidden folders"));
                }
                relative.push(part);
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("must be relative to the store"));
            }
            Component::ParentDir => return Err(invalid("cannot leave the store")),
        }
    }
    Ok(relative)
}
