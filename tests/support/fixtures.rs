//! Test fixtures and constants.

/// Key id written to test contexts; matches no real keyring.
pub const TEST_KEY_ID: &str = "0123456789ABCDEF";

/// Content of seeded password files. Listing never decrypts.
pub const PLACEHOLDER_CIPHERTEXT: &str =
    "-----BEGIN PGP MESSAGE-----\n\nnot a real message\n-----END PGP MESSAGE-----\n";

/// A small store: two top-level files and two folders.
pub const STANDARD_TREE: &[&str] = &[
    "github.gpg",
    "gitlab.gpg",
    "home/",
    "home/router.gpg",
    "work/",
    "work/vpn.gpg",
    "work/jira.gpg",
];
