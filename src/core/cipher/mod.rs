//! Cryptographic operations.
//!
//! Password files are encrypted with an external public-key backend. The
//! store only needs three things from it: encrypt a body for an identity,
//! decrypt a file, and list the identities that could be used.
//!
//! ## Backends
//!
//! - **GPG**: default, uses the `gpg` CLI and the user's keyring.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file next to `gpg.rs`
//! 3. Re-export from this module

use std::path::Path;

use zeroize::Zeroizing;

use crate::core::domain::Identity;
use crate::error::Result;

mod gpg;

pub use gpg::{parse_colon_listing, Gpg};

/// Cryptographic backend trait.
pub trait Cipher {
    /// Encrypt `plaintext` for `identity`.
    ///
    /// # Returns
    ///
    /// The ciphertext exactly as it must be written to disk.
    ///
    /// # Errors
    ///
    /// `CipherError::InvalidIdentity` if the backend does not know the
    /// identity, `CipherError::EncryptionFailed` otherwise.
    fn encrypt(&self, plaintext: &str, identity: &str) -> Result<Vec<u8>>;

    /// Decrypt the file at `path`.
    ///
    /// # Errors
    ///
    /// `CipherError::DecryptionFailed` if the file cannot be decrypted.
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<String>>;

    /// Secret keys available for decryption.
    fn identities(&self) -> Result<Vec<Identity>>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}
