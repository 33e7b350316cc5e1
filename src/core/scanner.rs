//! Store scanner.
//!
//! Turns a store directory tree into ordered [`StoreEntry`] and
//! [`FolderEntry`] lists. Hidden entries and version control metadata are
//! never visited.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::core::constants;
use crate::core::domain::{FolderEntry, StoreEntry};
use crate::error::{Result, StoreError};

fn ensure_dir(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(StoreError::NotFound(root.display().to_string()).into());
    }
    if !root.is_dir() {
        return Err(StoreError::NotADirectory(root.display().to_string()).into());
    }
    Ok(())
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Entries below the root whose name is hidden (this covers `.git`).
fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map_or(true, |name| is_hidden(name) || name == constants::VCS_DIR)
}

/// Folder path relative to the store root, `/`-separated.
fn relative_label(root: &Path, dir: &Path) -> String {
    dir.strip_prefix(root)
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

/// List password files under `root` whose label contains `filter`.
///
/// Matching is a case-insensitive substring test on the label only; an empty
/// filter keeps everything. Entries come sorted by folder path, then file
/// name, both compared bytewise.
///
/// # Errors
///
/// `StoreError::NotFound` if `root` is missing, `StoreError::NotADirectory`
/// if it is not a directory.
pub fn list_secrets(root: &Path, filter: &str) -> Result<Vec<StoreEntry>> {
    ensure_dir(root)?;
    let needle = filter.to_lowercase();

    let mut files: Vec<(PathBuf, String)> = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(label) = constants::label_from_file_name(file_name) else {
            continue;
        };
        if !needle.is_empty() && !label.to_lowercase().contains(&needle) {
            continue;
        }
        let parent = entry.path().parent().unwrap_or(root).to_path_buf();
        files.push((parent, file_name.to_string()));
    }

    // Preorder walking interleaves folders whose names sort around '/', so
    // order explicitly on the relative folder path.
    let mut keyed: Vec<(String, PathBuf, String)> = Vec::with_capacity(files.len());
    let mut last: Option<(PathBuf, String)> = None;
    for (parent, file_name) in files {
        let label = match &last {
            Some((dir, label)) if *dir == parent => label.clone(),
            _ => {
                let label = relative_label(root, &parent);
                last = Some((parent.clone(), label.clone()));
                label
            }
        };
        keyed.push((label, parent, file_name));
    }
    keyed.sort_by(|a, b| (&a.0, &a.2).cmp(&(&b.0, &b.2)));

    let entries: Vec<StoreEntry> = keyed
        .into_iter()
        .map(|(root_label, parent, file_name)| {
            let label = constants::label_from_file_name(&file_name)
                .unwrap_or(&file_name)
                .to_string();
            StoreEntry::new(parent, root_label, file_name, label)
        })
        .collect();

    debug!(root = %root.display(), filter, count = entries.len(), "scanned store");
    Ok(entries)
}

/// List the non-hidden directories directly under `root`, sorted by name.
///
/// # Errors
///
/// Same as [`list_secrets`].
pub fn list_folders(root: &Path) -> Result<Vec<FolderEntry>> {
    ensure_dir(root)?;

    let mut folders = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_hidden(&name) || !entry.path().is_dir() {
            continue;
        }
        folders.push(FolderEntry::new(entry.path(), name));
    }
    folders.sort_by(|a, b| a.name().cmp(b.name()));

    debug!(root = %root.display(), count = folders.len(), "listed folders");
    Ok(folders)
}
