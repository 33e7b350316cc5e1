//! GPG cipher backend.
//!
//! Encrypts password files using GnuPG (GNU Privacy Guard).
//!
//! ## Requirements
//!
//! - `gpg` CLI must be installed
//! - The identity's public key must be in the keyring to encrypt
//! - The matching private key must be available to decrypt
//!
//! `GNUPGHOME` is honored, as with any gpg invocation.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants;
use crate::core::domain::Identity;
use crate::error::{CipherError, Result};

/// GPG cipher backend using gpg CLI
#[derive(Debug, Default, Clone, Copy)]
pub struct Gpg;

impl Gpg {
    /// Check if gpg CLI is available
    fn check_gpg() -> Result<()> {
        which::which("gpg").map_err(|_| {
            CipherError::BackendUnavailable(
                "gpg CLI not found. Install GnuPG from https://gnupg.org/download/".to_string(),
            )
        })?;
        Ok(())
    }

    fn is_identity_error(stderr: &str) -> bool {
        let stderr = stderr.to_lowercase();
        stderr.contains("no public key")
            || stderr.contains("unusable public key")
            || stderr.contains("no such user")
            || stderr.contains("skipped")
    }
}

impl Cipher for Gpg {
    fn name(&self) -> &'static str {
        "gpg"
    }

    fn encrypt(&self, plaintext: &str, identity: &str) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), "encrypting with GPG");

        Self::check_gpg()?;

        if identity.trim().is_empty() {
            return Err(CipherError::InvalidIdentity("no identity configured".to_string()).into());
        }

        let mut cmd = Command::new("gpg");
        cmd.args([
            "--encrypt",
            "--armor",
            "--trust-model",
            "always",  // Trust the configured key without confirmation
            "--batch", // Non-interactive mode
            "--yes",   // Assume yes to all questions
            "--recipient",
            identity,
        ]);

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| CipherError::EncryptionFailed(format!("failed to spawn gpg: {}", e)))?;

        // Feed stdin from a second thread while stdout is drained, so large
        // bodies cannot fill both pipes.
        let stdin = child.stdin.take();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(plaintext.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output
            .map_err(|e| CipherError::EncryptionFailed(format!("gpg command failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if Self::is_identity_error(&stderr) {
                return Err(CipherError::InvalidIdentity(identity.to_string()).into());
            }
            return Err(
                CipherError::EncryptionFailed(format!("gpg encrypt failed: {}", stderr.trim())).into(),
            );
        }

        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(CipherError::EncryptionFailed(format!(
                    "failed to write plaintext: {}",
                    e
                ))
                .into())
            }
            Err(_) => {
                return Err(
                    CipherError::EncryptionFailed("plaintext writer panicked".to_string()).into(),
                )
            }
        }

        // An empty armor means gpg silently skipped the recipient
        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            return Err(CipherError::InvalidIdentity(identity.to_string()).into());
        }

        trace!(ciphertext_len = output.stdout.len(), "encrypted with GPG");
        Ok(output.stdout)
    }

    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>> {
        trace!(path = %path.display(), "decrypting with GPG");

        if !path.is_file() {
            return Err(CipherError::DecryptionFailed(format!(
                "{} is not a file",
                path.display()
            ))
            .into());
        }
        if path.extension().and_then(|e| e.to_str()) != Some(constants::SECRET_EXT) {
            return Err(CipherError::DecryptionFailed(format!(
                "{} is not a gpg file",
                path.display()
            ))
            .into());
        }

        Self::check_gpg()?;

        // No --batch: a passphrase-protected key must be able to prompt
        let output = Command::new("gpg")
            .args(["--quiet", "--yes", "--decrypt"])
            .arg(path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| CipherError::DecryptionFailed(format!("failed to spawn gpg: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CipherError::DecryptionFailed(format!(
                "gpg decrypt failed: {}. Ensure you have the private key in your keyring.",
                stderr.trim()
            ))
            .into());
        }

        let plaintext = String::from_utf8(output.stdout)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)))?;

        trace!(plaintext_len = plaintext.len(), "decrypted with GPG");
        Ok(Zeroizing::new(plaintext))
    }

    fn identities(&self) -> Result<Vec<Identity>> {
        Self::check_gpg()?;

        let output = Command::new("gpg")
            .args(["--list-secret-keys", "--with-colons", "--fixed-list-mode"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CipherError::BackendUnavailable(format!("failed to spawn gpg: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CipherError::BackendUnavailable(format!(
                "gpg --list-secret-keys failed: {}",
                stderr.trim()
            ))
            .into());
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let identities = parse_colon_listing(&listing);
        trace!(count = identities.len(), "listed GPG identities");
        Ok(identities)
    }
}

/// Undo gpg's `\xNN` escaping in colon listings.
fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut rest = field;
    while let Some(pos) = rest.find("\\x") {
        out.push_str(&rest[..pos]);
        let hex = rest.get(pos + 2..pos + 4);
        match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
            Some(byte) if byte.is_ascii() => {
                out.push(byte as char);
                rest = &rest[pos + 4..];
            }
            _ => {
                out.push_str("\\x");
                rest = &rest[pos + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse `gpg --list-secret-keys --with-colons` output.
///
/// Each `sec` record starts a key; its long key id is field 5. The first
/// `fpr` record after it is the primary fingerprint, and `uid` records
/// contribute user ids (field 10). Subkey records are ignored.
pub fn parse_colon_listing(listing: &str) -> Vec<Identity> {
    struct Pending {
        key_id: String,
        fingerprint: String,
        uids: Vec<String>,
        in_subkey: bool,
    }

    let mut identities = Vec::new();
    let mut pending: Option<Pending> = None;

    for line in listing.lines() {
        let fields: Vec<&str> = line.split(':').collect();
        match fields.first().copied() {
            Some("sec") => {
                if let Some(p) = pending.take() {
                    identities.push(Identity::new(p.key_id, p.fingerprint, p.uids));
                }
                pending = Some(Pending {
                    key_id: fields.get(4).copied().unwrap_or_default().to_string(),
                    fingerprint: String::new(),
                    uids: Vec::new(),
                    in_subkey: false,
                });
            }
            Some("fpr") => {
                if let Some(p) = pending.as_mut() {
                    if !p.in_subkey && p.fingerprint.is_empty() {
                        p.fingerprint = fields.get(9).copied().unwrap_or_default().to_string();
                    }
                }
            }
            Some("uid") => {
                if let Some(p) = pending.as_mut() {
                    if let Some(uid) = fields.get(9).filter(|u| !u.is_empty()) {
                        p.uids.push(unescape(uid));
                    }
                }
            }
            Some("ssb") => {
                if let Some(p) = pending.as_mut() {
                    p.in_subkey = true;
                }
            }
            _ => {}
        }
    }
    if let Some(p) = pending {
        identities.push(Identity::new(p.key_id, p.fingerprint, p.uids));
    }

    identities
        .into_iter()
        .filter(|i| !i.key_id().is_empty())
        .collect()
}
