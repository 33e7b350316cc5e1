//! JSON views.
//!
//! Domain values are converted explicitly into these shapes for `--json`
//! output. Field names are stable for scripts.

use serde::Serialize;

use crate::core::domain::{FolderEntry, SecretRecord, StoreEntry};

/// A password file.
#[derive(Debug, Serialize)]
pub struct EntryView {
    /// Enclosing folder, absolute.
    pub root: String,
    /// Enclosing folder relative to the store root, empty at top level.
    pub root_name: String,
    /// File name.
    pub f: String,
    /// Label (file name without extension).
    pub f_name: String,
    /// Absolute file path.
    pub path: String,
}

impl From<&StoreEntry> for EntryView {
    fn from(entry: &StoreEntry) -> Self {
        Self {
            root: entry.root_path().display().to_string(),
            root_name: entry.root_label().to_string(),
            f: entry.file_name().to_string(),
            f_name: entry.label().to_string(),
            path: entry.full_path().display().to_string(),
        }
    }
}

/// A decrypted record.
#[derive(Serialize)]
pub struct RecordView<'a> {
    pub app: &'a str,
    pub password: &'a str,
    pub username: &'a str,
    pub url: &'a str,
    pub comment: &'a str,
}

impl<'a> From<&'a SecretRecord> for RecordView<'a> {
    fn from(record: &'a SecretRecord) -> Self {
        Self {
            app: record.label(),
            password: record.secret(),
            username: record.username(),
            url: record.url(),
            comment: record.comment(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FolderView {
    pub path: String,
    pub name: String,
}

impl From<&FolderEntry> for FolderView {
    fn from(folder: &FolderEntry) -> Self {
        Self {
            path: folder.full_path().display().to_string(),
            name: folder.name().to_string(),
        }
    }
}

pub fn entries(entries: &[StoreEntry]) -> Vec<EntryView> {
    entries.iter().map(EntryView::from).collect()
}

pub fn folders(folders: &[FolderEntry]) -> Vec<FolderView> {
    folders.iter().map(FolderView::from).collect()
}
