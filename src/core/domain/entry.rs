//! Store entries.
//!
//! Plain values produced by the scanner: one per password file and one per
//! top-level folder.

use std::path::{Path, PathBuf};

/// Handle to one encrypted password file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreEntry {
    root_path: PathBuf,
    root_label: String,
    file_name: String,
    label: String,
    full_path: PathBuf,
}

impl StoreEntry {
    /// Build an entry for `file_name` inside `root_path`.
    ///
    /// `root_label` is the folder path relative to the store root, empty for
    /// the top level. `label` is the file name without extension.
    pub fn new(
        root_path: PathBuf,
        root_label: String,
        file_name: String,
        label: String,
    ) -> Self {
        let full_path = root_path.join(&file_name);
        Self {
            root_path,
            root_label,
            file_name,
            label,
            full_path,
        }
    }

    /// Absolute path of the enclosing folder.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Enclosing folder relative to the store root.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Absolute path of the encrypted file.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// `folder/label`, or just `label` at the top level.
    pub fn display_name(&self) -> String {
        if self.root_label.is_empty() {
            self.label.clone()
        } else {
            format!("{}/{}", self.root_label, self.label)
        }
    }
}

impl std::fmt::Display for StoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A top-level folder of the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderEntry {
    full_path: PathBuf,
    name: String,
}

impl FolderEntry {
    pub fn new(full_path: PathBuf, name: String) -> Self {
        Self { full_path, name }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for FolderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
