//! Secret record type.
//!
//! A decrypted password file: the password itself plus its metadata.

use zeroize::Zeroizing;

/// A decrypted password file.
///
/// Only ever built from decrypted plaintext or from user input; it is
/// serialized and encrypted again before touching the disk.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SecretRecord {
    label: String,
    secret: Zeroizing<String>,
    username: String,
    url: String,
    comment: String,
}

impl SecretRecord {
    /// Create a record from its fields.
    pub fn new(
        label: impl Into<String>,
        secret: impl Into<String>,
        username: impl Into<String>,
        url: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            secret: Zeroizing::new(secret.into()),
            username: username.into(),
            url: url.into(),
            comment: comment.into(),
        }
    }

    /// Display name, the file name without extension.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The password value.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Freeform multi-line comment.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Same record with another password.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Zeroizing::new(secret.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

}

impl std::fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretRecord")
            .field("label", &self.label)
            .field("secret", &"[redacted]")
            .field("username", &self.username)
            .field("url", &self.url)
            .field("comment_len", &self.comment.len())
            .finish()
    }
}

impl std::fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = SecretRecord::new("github", "p@ss", "alice", "https://x", "note");
        assert_eq!(record.label(), "github");
        assert_eq!(record.secret(), "p@ss");
        assert_eq!(record.username(), "alice");
        assert_eq!(record.url(), "https://x");
        assert_eq!(record.comment(), "note");
    }

    #[test]
    fn test_record_debug_redacts_secret() {
        let record = SecretRecord::new("github", "hunter2", "alice", "", "");
        let debug = format!("{:?}", record);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn test_with_methods_replace_single_field() {
        let record = SecretRecord::new("github", "old", "alice", "https://x", "c")
            .with_secret("new")
            .with_url("https://y");
        assert_eq!(record.secret(), "new");
        assert_eq!(record.url(), "https://y");
        assert_eq!(record.username(), "alice");
        assert_eq!(record.comment(), "c");
    }
}
