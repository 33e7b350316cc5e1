//! Constants used throughout pouch.
//!
//! Centralizes magic strings and configuration values.

/// Application name, also the prefix of every default path.
pub const APP_NAME: &str = "pouch";

/// Extension of encrypted password files (without the dot).
pub const SECRET_EXT: &str = "gpg";

/// Marker file at the store root holding the encryption identity.
pub const GPG_ID_FILE: &str = ".gpg-id";

/// Git attributes file written at the store root.
pub const GITATTRIBUTES_FILE: &str = ".gitattributes";

/// Content of the git attributes file (textual diffs of encrypted files).
pub const GITATTRIBUTES: &str = "*.gpg diff=gpg";

/// Version control metadata directory, never scanned.
pub const VCS_DIR: &str = ".git";

/// Reserved configuration section used for bootstrap and fallbacks.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "POUCH_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "POUCH_LOG";

/// Default username marker line prefix.
pub const DEFAULT_USERNAME_MARKER: &str = "└─ USERNAME :: ";

/// Default url marker line prefix.
pub const DEFAULT_URL_MARKER: &str = "└─ URL      :: ";

/// Default sync branch.
pub const DEFAULT_BRANCH: &str = "main";

/// Literal tokens used for booleans in the configuration file.
pub const TRUE_TOKEN: &str = "True";
pub const FALSE_TOKEN: &str = "False";

/// Configuration file path: `~/.pouchrc`, or `$POUCH_CONFIG` when set.
pub fn config_path() -> Option<std::path::PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(path.into());
    }
    dirs::home_dir().map(|home| home.join(format!(".{}rc", APP_NAME)))
}

/// Default store path for a context.
///
/// The default context lives in `~/.pouch`, any other context created with
/// a new section in `~/.pouch-<context>`.
pub fn default_store_path(context: &str) -> Option<std::path::PathBuf> {
    let home = dirs::home_dir()?;
    if context == DEFAULT_SECTION {
        Some(home.join(format!(".{}", APP_NAME)))
    } else {
        Some(home.join(format!(".{}-{}", APP_NAME, context.to_lowercase())))
    }
}

/// Secret file name for a label (`github` -> `github.gpg`).
pub fn secret_file_name(label: &str) -> String {
    format!("{}.{}", label, SECRET_EXT)
}

/// Label for a secret file name, `None` when the extension does not match.
pub fn label_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(SECRET_EXT)
        .and_then(|rest| rest.strip_suffix('.'))
}
