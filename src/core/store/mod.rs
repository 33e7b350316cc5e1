//! The primary interface for pouch operations.
//!
//! A `Store` binds one [`StoreContext`] to a cipher and a version control
//! backend and provides every secret, folder and sync operation on that
//! context's directory tree.

mod folders;
mod lifecycle;
mod secrets;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::cipher::{Cipher, Gpg};
use crate::core::codec::Markers;
use crate::core::domain::StoreContext;
use crate::core::git::{Git, VersionControl};
use crate::error::{ConfigError, Result};

pub use lifecycle::choose_identity;
pub use secrets::Change;

/// The primary interface for pouch operations.
///
/// Owns the context and the backends. Holds no other state: every operation
/// reads the directory tree afresh.
pub struct Store {
    pub(super) ctx: StoreContext,
    pub(super) root: PathBuf,
    pub(super) markers: Markers,
    pub(super) cipher: Box<dyn Cipher>,
    pub(super) vcs: Box<dyn VersionControl>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("root", &self.root)
            .field("cipher", &self.cipher.name())
            .field("sync_enabled", &self.ctx.sync_enabled)
            .finish()
    }
}

impl Store {
    /// Open the store of an initialized context with the gpg and git
    /// backends.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the context has no path or
    /// its directory does not exist.
    pub fn open(name: &str, ctx: StoreContext) -> Result<Self> {
        let root = ctx.root();
        if ctx.path.trim().is_empty() || !root.is_dir() {
            return Err(ConfigError::NotInitialized {
                context: name.to_string(),
            }
            .into());
        }
        Ok(Self::with_backends(ctx, Box::new(Gpg), Box::new(Git)))
    }

    /// Build a store with explicit backends. The directory is not checked.
    pub fn with_backends(
        ctx: StoreContext,
        cipher: Box<dyn Cipher>,
        vcs: Box<dyn VersionControl>,
    ) -> Self {
        Self {
            root: ctx.root(),
            markers: ctx.markers(),
            ctx,
            cipher,
            vcs,
        }
    }

    /// Context this store was opened with.
    pub fn context(&self) -> &StoreContext {
        &self.ctx
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Line markers for the record codec.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Commit and push a change when sync is enabled.
    ///
    /// The filesystem change is already done when this runs; a failure is
    /// reported but nothing is rolled back.
    pub(super) fn record_change(&self, message: &str) -> Result<()> {
        if !self.ctx.sync_enabled {
            return Ok(());
        }
        debug!(message, "recording change");
        self.vcs
            .commit(&self.root, message, &self.ctx.sync_branch)
            .map_err(|e| {
                warn!(error = %e, "change written but not synced");
                e
            })
    }
}

/// Replace `path` with `contents` through a hidden temporary file in the same
/// directory, so readers see either the old or the new content.
pub(super) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = dir.join(format!(".{}.tmp", file_name));

    let written = fs::File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(contents)?;
            f.sync_all()
        })
        .and_then(|_| fs::rename(&tmp, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
