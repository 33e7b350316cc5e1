//! Test support utilities for pouch integration tests.
//!
//! Provides isolated environments, a pre-seeded store and command helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use pouch::core::config;
use pouch::core::constants::{DEFAULT_SECTION, GPG_ID_FILE};
use pouch::core::domain::StoreContext;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Child processes get their own HOME and config file, so tests can run in
/// parallel.
pub struct Test {
    /// Working directory of spawned commands; stores live below it
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Configuration file used by spawned commands.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".pouchrc")
    }

    /// Root of the store seeded by [`Test::with_store`].
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("store")
    }

    /// Create a test environment with an initialized `DEFAULT` context.
    ///
    /// The store directory exists and the config points at it; no gpg is
    /// involved, so only commands that do not decrypt can run against it.
    pub fn with_store() -> Self {
        let t = Self::new();
        t.add_context(DEFAULT_SECTION, &t.store_path());
        t
    }

    /// Register a context whose store lives at `root`.
    pub fn add_context(&self, name: &str, root: &std::path::Path) {
        fs::create_dir_all(root).expect("failed to create store");
        fs::write(root.join(GPG_ID_FILE), TEST_KEY_ID).expect("failed to write .gpg-id");

        let path = self.config_path();
        config::bootstrap(&path).expect("failed to bootstrap config");
        let ctx = StoreContext {
            path: root.display().to_string(),
            identity: TEST_KEY_ID.to_string(),
            ..StoreContext::default()
        };
        config::save(&path, name, &ctx).expect("failed to save context");
    }

    /// Create folders and placeholder password files below the store.
    ///
    /// Each path is relative to the store root; a trailing `/` creates a
    /// folder, anything else an (undecryptable) `.gpg` file.
    pub fn seed(&self, paths: &[&str]) {
        let root = self.store_path();
        for rel in paths {
            let full = root.join(rel.trim_end_matches('/'));
            if rel.ends_with('/') {
                fs::create_dir_all(&full).expect("failed to create folder");
            } else {
                if let Some(parent) = full.parent() {
                    fs::create_dir_all(parent).expect("failed to create folder");
                }
                fs::write(&full, PLACEHOLDER_CIPHERTEXT).expect("failed to write file");
            }
        }
    }
}
