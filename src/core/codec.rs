//! Record codec.
//!
//! Converts between a [`SecretRecord`] and the plaintext body that gets
//! encrypted into a password file:
//!
//! ```text
//! p@ss                        <- password, always the first line
//! └─ USERNAME :: alice        <- username marker + username
//! └─ URL      :: https://x    <- url marker + url
//! any other line              <- comment, order preserved
//! ```
//!
//! The format is positional on write and marker-based on read, so both
//! markers must be the ones the store was written with.

use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::domain::SecretRecord;

/// Line prefixes identifying the username and url lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    username: String,
    url: String,
}

impl Markers {
    pub fn new(username: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            url: url.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Classify a body line by the longest marker it starts with.
    ///
    /// An empty marker never matches. On equal length the username marker
    /// wins.
    fn classify<'a>(&self, line: &'a str) -> Option<(LineKind, &'a str)> {
        let username = prefix_len(line, &self.username);
        let url = prefix_len(line, &self.url);
        match (username, url) {
            (Some(u), Some(r)) if r > u => Some((LineKind::Url, &line[r..])),
            (Some(u), _) => Some((LineKind::Username, &line[u..])),
            (None, Some(r)) => Some((LineKind::Url, &line[r..])),
            (None, None) => None,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_USERNAME_MARKER,
            constants::DEFAULT_URL_MARKER,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Username,
    Url,
}

fn prefix_len(line: &str, marker: &str) -> Option<usize> {
    if !marker.is_empty() && line.starts_with(marker) {
        Some(marker.len())
    } else {
        None
    }
}

/// Serialize record fields into the plaintext body.
///
/// The comment is written verbatim followed by a newline; an empty comment
/// writes nothing.
pub fn serialize(
    secret: &str,
    username: &str,
    url: &str,
    comment: &str,
    markers: &Markers,
) -> Zeroizing<String> {
    let mut body = Zeroizing::new(String::with_capacity(
        secret.len() + username.len() + url.len() + comment.len() + 64,
    ));
    body.push_str(secret);
    body.push('\n');
    body.push_str(&markers.username);
    body.push_str(username);
    body.push('\n');
    body.push_str(&markers.url);
    body.push_str(url);
    body.push('\n');
    if !comment.is_empty() {
        body.push_str(comment);
        body.push('\n');
    }
    body
}

/// Serialize a whole record.
pub fn serialize_record(record: &SecretRecord, markers: &Markers) -> Zeroizing<String> {
    serialize(
        record.secret(),
        record.username(),
        record.url(),
        record.comment(),
        markers,
    )
}

/// Parse a decrypted body.
///
/// Never fails: the first line is the password whatever it contains, marker
/// lines fill username and url (a repeated marker overwrites), everything
/// else becomes the comment.
pub fn parse(file_name: &str, plaintext: &str, markers: &Markers) -> SecretRecord {
    let label = constants::label_from_file_name(file_name).unwrap_or(file_name);

    let mut lines = plaintext.lines();
    let secret = lines.next().map(str::trim).unwrap_or_default();

    let mut username = "";
    let mut url = "";
    let mut comment: Vec<&str> = Vec::new();

    for line in lines {
        match markers.classify(line) {
            Some((LineKind::Username, rest)) => username = rest.trim(),
            Some((LineKind::Url, rest)) => url = rest.trim(),
            None => comment.push(line),
        }
    }

    SecretRecord::new(label, secret, username, url, comment.join("\n"))
}
