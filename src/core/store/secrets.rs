//! Password file operations.
//!
//! List, read, create, modify and delete encrypted password files.

use std::fs;

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{write_atomic, Store};
use crate::core::codec;
use crate::core::constants;
use crate::core::domain::{SecretRecord, StoreEntry};
use crate::core::scanner;
use crate::core::validation;
use crate::error::{CipherError, Result, StoreError};

/// Kind of modification, which decides the commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Username,
    Url,
    Comment,
    PasswordGenerated,
    PasswordSaved,
    /// Whole body edited by hand.
    Raw,
}

impl Change {
    /// Commit and status message.
    pub fn message(self) -> &'static str {
        match self {
            Change::Username => "Username modified",
            Change::Url => "Url modified",
            Change::Comment => "Comment modified",
            Change::PasswordGenerated => "New password generated",
            Change::PasswordSaved => "New password saved",
            Change::Raw => "File modified",
        }
    }
}

impl Store {
    /// Password files whose label contains `filter` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` / `StoreError::NotADirectory` if the
    /// root is unusable.
    pub fn list(&self, filter: &str) -> Result<Vec<StoreEntry>> {
        scanner::list_secrets(&self.root, filter)
    }

    /// Decrypt an entry without parsing it.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EmptyPlaintext` if decryption yields nothing.
    pub fn read_raw(&self, entry: &StoreEntry) -> Result<Zeroizing<String>> {
        debug!(entry = %entry.display_name(), "decrypting");
        let plaintext = self.cipher.decrypt(entry.full_path())?;
        if plaintext.is_empty() {
            return Err(CipherError::EmptyPlaintext(entry.display_name()).into());
        }
        Ok(plaintext)
    }

    /// Decrypt and parse an entry.
    ///
    /// # Errors
    ///
    /// Propagates decryption failures and `CipherError::EmptyPlaintext`.
    pub fn read(&self, entry: &StoreEntry) -> Result<SecretRecord> {
        let plaintext = self.read_raw(entry)?;
        Ok(codec::parse(entry.file_name(), &plaintext, &self.markers))
    }

    /// Create `<root>/<folder>/<name>.gpg` holding `record`.
    ///
    /// An empty `folder` creates the file at the top level. The record's own
    /// label is ignored; `name` decides it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an invalid name,
    /// `StoreError::FolderNotFound` if the folder does not exist,
    /// `StoreError::AlreadyExists` if the file exists, and cipher errors
    /// when encryption fails (nothing is written then).
    pub fn create(&self, folder: &str, name: &str, record: &SecretRecord) -> Result<StoreEntry> {
        let name = validation::validate_name("password name", name)?;
        let dir = self.root.join(validation::validate_folder_path(folder)?);
        if !dir.is_dir() {
            return Err(StoreError::FolderNotFound(folder.to_string()).into());
        }

        let file_name = constants::secret_file_name(&name);
        let path = dir.join(&file_name);
        if path.exists() {
            return Err(StoreError::AlreadyExists(path.display().to_string()).into());
        }

        let body = codec::serialize_record(record, &self.markers);
        let ciphertext = self.cipher.encrypt(&body, &self.ctx.identity)?;
        fs::write(&path, ciphertext)?;
        info!(folder, name = %name, "password file created");

        let entry = StoreEntry::new(dir, folder.to_string(), file_name, name);
        self.record_change("Password file created")?;
        Ok(entry)
    }

    /// Replace an entry's content with `record`.
    ///
    /// The new body is encrypted first and swapped in atomically; a failed
    /// encryption leaves the file untouched.
    pub fn modify(&self, entry: &StoreEntry, record: &SecretRecord, change: Change) -> Result<()> {
        let body = codec::serialize_record(record, &self.markers);
        self.replace(entry, &body, change)
    }

    /// Replace an entry's content with a hand-edited body.
    pub fn replace_raw(&self, entry: &StoreEntry, body: &str) -> Result<()> {
        self.replace(entry, body, Change::Raw)
    }

    fn replace(&self, entry: &StoreEntry, body: &str, change: Change) -> Result<()> {
        if !entry.full_path().is_file() {
            return Err(StoreError::NotFound(entry.full_path().display().to_string()).into());
        }
        let ciphertext = self.cipher.encrypt(body, &self.ctx.identity)?;
        write_atomic(entry.full_path(), &ciphertext)?;
        info!(entry = %entry.display_name(), change = change.message(), "password file modified");
        self.record_change(change.message())
    }

    /// Delete an entry's file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the file is already gone.
    pub fn delete(&self, entry: &StoreEntry) -> Result<()> {
        if !entry.full_path().is_file() {
            return Err(StoreError::NotFound(entry.full_path().display().to_string()).into());
        }
        fs::remove_file(entry.full_path())?;
        info!(entry = %entry.display_name(), "password file deleted");
        self.record_change(&format!(
            "Password file <{}> has been deleted",
            entry.label()
        ))
    }
}
