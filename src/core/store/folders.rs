//! Folder operations.

use std::fs;

use tracing::info;

use super::Store;
use crate::core::domain::FolderEntry;
use crate::core::scanner;
use crate::core::validation;
use crate::error::{Result, StoreError};

impl Store {
    /// Top-level folders, sorted by name.
    pub fn folders(&self) -> Result<Vec<FolderEntry>> {
        scanner::list_folders(&self.root)
    }

    /// Create a top-level folder.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an invalid name and
    /// `StoreError::FolderExists` if anything already has that path.
    pub fn create_folder(&self, name: &str) -> Result<FolderEntry> {
        let name = validation::validate_name("folder name", name)?;
        let path = self.root.join(&name);
        if path.exists() {
            return Err(StoreError::FolderExists(name).into());
        }
        fs::create_dir(&path)?;
        info!(folder = %name, "folder created");

        self.record_change(&format!("Folder <{}> has been created", name))?;
        Ok(FolderEntry::new(path, name))
    }

    /// Delete a top-level folder and everything in it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FolderNotFound` if it does not exist and
    /// `StoreError::NotADirectory` if the path is a file.
    pub fn delete_folder(&self, name: &str) -> Result<()> {
        let name = validation::validate_name("folder name", name)?;
        let path = self.root.join(&name);
        if !path.exists() {
            return Err(StoreError::FolderNotFound(name).into());
        }
        if !path.is_dir() {
            return Err(StoreError::NotADirectory(path.display().to_string()).into());
        }
        fs::remove_dir_all(&path)?;
        info!(folder = %name, "folder deleted");

        self.record_change(&format!("Folder <{}> has been deleted", name))
    }
}
