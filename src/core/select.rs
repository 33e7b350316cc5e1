//! Candidate selection.
//!
//! Commands act on exactly one password file or folder. Filters usually
//! narrow the candidates to one; when they don't, an interactive
//! [`Selector`] picks, and machine mode (no selector) fails instead.

use tracing::debug;

use crate::core::domain::FolderEntry;
use crate::error::{Result, SelectionError, ValidationError};

/// Picks one item out of several. Only used in interactive mode.
pub trait Selector {
    /// Return the index of the chosen item in `items`.
    fn select_one(&self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Resolve `candidates` to exactly one item.
///
/// Zero candidates is `NoMatch`, one is returned as is. With several, the
/// selector chooses; without one the result is `Ambiguous`.
pub fn resolve_one<T>(
    what: &'static str,
    filter: &str,
    mut candidates: Vec<T>,
    describe: impl Fn(&T) -> String,
    selector: Option<&dyn Selector>,
) -> Result<T> {
    debug!(what, filter, count = candidates.len(), "resolving candidates");
    match candidates.len() {
        0 => Err(SelectionError::NoMatch {
            what,
            filter: filter.to_string(),
        }
        .into()),
        1 => Ok(candidates.remove(0)),
        count => {
            let Some(selector) = selector else {
                return Err(SelectionError::Ambiguous {
                    what,
                    filter: filter.to_string(),
                    count,
                }
                .into());
            };
            let labels: Vec<String> = candidates.iter().map(describe).collect();
            let index = selector.select_one(&format!("Select a {}", what), &labels)?;
            if index >= candidates.len() {
                return Err(SelectionError::Cancelled(format!("{} selection", what)).into());
            }
            Ok(candidates.swap_remove(index))
        }
    }
}

/// Folders whose name starts with `name`, ignoring case.
pub fn match_folders(folders: &[FolderEntry], name: &str) -> Vec<FolderEntry> {
    let prefix = name.to_lowercase();
    folders
        .iter()
        .filter(|f| f.name().to_lowercase().starts_with(&prefix))
        .cloned()
        .collect()
}

/// Resolve a folder by case-insensitive name prefix.
///
/// A single match is returned directly. Otherwise machine mode fails
/// (`Ambiguous`, `NoMatch`, or `EmptyField` for an empty name) while
/// interactive mode offers the matches to the selector; a non-empty name
/// that matches nothing is `NoMatch` in both modes.
pub fn resolve_folder(
    folders: &[FolderEntry],
    name: &str,
    selector: Option<&dyn Selector>,
) -> Result<FolderEntry> {
    if folders.is_empty() {
        return Err(SelectionError::NoMatch {
            what: "folder",
            filter: name.to_string(),
        }
        .into());
    }

    let mut matches = match_folders(folders, name);
    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }

    let no_match = || -> crate::error::Error {
        SelectionError::NoMatch {
            what: "folder",
            filter: name.to_string(),
        }
        .into()
    };

    // An empty name matches every folder, so `matches` is only empty for a
    // non-empty name.
    let Some(selector) = selector else {
        return Err(if name.is_empty() {
            ValidationError::EmptyField("folder".to_string()).into()
        } else if matches.is_empty() {
            no_match()
        } else {
            SelectionError::Ambiguous {
                what: "folder",
                filter: name.to_string(),
                count: matches.len(),
            }
            .into()
        });
    };
    if matches.is_empty() {
        return Err(no_match());
    }
    resolve_one("folder", name, matches, |f| f.name().to_string(), Some(selector))
}
