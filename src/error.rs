//! Error types for pouch.
//!
//! Each concern has its own enum; [`Error`] wraps them so `?` works across
//! module boundaries.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Any failure to load a section: missing file, missing section or
    /// malformed content. Details are only logged.
    #[error("cannot load context '{section}' from config file")]
    LoadFailed { section: String },

    #[error("context '{0}' already exists")]
    SectionExists(String),

    #[error("context '{context}' is not initialized")]
    NotInitialized { context: String },

    #[error("config parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("cannot write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("unable to determine home directory")]
    NoHome,
}

/// Store tree errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("path does not exist: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("password file already exists: {0}")]
    AlreadyExists(String),

    #[error("folder does not exist: {0}")]
    FolderNotFound(String),

    #[error("folder already exists: {0}")]
    FolderExists(String),
}

/// Crypto backend errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("decrypted file is empty: {0}")]
    EmptyPlaintext(String),

    #[error("gpg not available: {0}")]
    BackendUnavailable(String),
}

/// Candidate selection errors.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("no {what} matches '{filter}'")]
    NoMatch { what: &'static str, filter: String },

    #[error("{count} {} match '{filter}', be more specific", plural(.what))]
    Ambiguous {
        what: &'static str,
        filter: String,
        count: usize,
    },

    #[error("{0} cancelled")]
    Cancelled(String),
}

/// Plural of a candidate kind (`folder`, `password`, `identity`).
fn plural(what: &str) -> String {
    match what.strip_suffix('y') {
        Some(stem) => format!("{}ies", stem),
        None => format!("{}s", what),
    }
}

/// User input errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("missing value for {0}")]
    EmptyField(String),

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("{0} needs an interactive terminal")]
    Interactive(String),
}

/// Version control errors.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("git not available: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short hint printed under the error in interactive mode.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(ConfigError::NotInitialized { .. }) => Some("run: pouch init"),
            Error::Config(ConfigError::LoadFailed { .. }) => {
                Some("run: pouch init --new-section, or check ~/.pouchrc")
            }
            Error::Cipher(CipherError::InvalidIdentity(_)) => {
                Some("list your keys with: gpg --list-secret-keys")
            }
            Error::Selection(SelectionError::Ambiguous { .. }) => {
                Some("narrow the filter or drop --json to pick interactively")
            }
            _ => None,
        }
    }
}
