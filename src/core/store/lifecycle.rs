//! Store lifecycle: initialization and sync commands.

use std::fs;

use tracing::{debug, info};

use super::Store;
use crate::core::cipher::Cipher;
use crate::core::constants;
use crate::core::domain::{Identity, StoreContext};
use crate::core::git::{Remote, VersionControl};
use crate::core::select::{self, Selector};
use crate::core::validation;
use crate::error::{CipherError, Result, StoreError};

impl Store {
    /// Initialize the directory of `ctx`.
    ///
    /// Creates the store root if needed and writes `.gitattributes` (gpg
    /// diff driver) and `.gpg-id` (the identity). Existing marker files are
    /// overwritten; password files are never touched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when path or identity is blank and
    /// `StoreError::NotADirectory` when the path is a file.
    pub fn init(
        ctx: StoreContext,
        cipher: Box<dyn Cipher>,
        vcs: Box<dyn VersionControl>,
    ) -> Result<Self> {
        validation::validate_field("path", &ctx.path)?;
        validation::validate_field("identity", &ctx.identity)?;

        let root = ctx.root();
        if root.exists() && !root.is_dir() {
            return Err(StoreError::NotADirectory(root.display().to_string()).into());
        }
        fs::create_dir_all(&root)?;

        fs::write(
            root.join(constants::GITATTRIBUTES_FILE),
            constants::GITATTRIBUTES,
        )?;
        fs::write(root.join(constants::GPG_ID_FILE), &ctx.identity)?;
        info!(path = %root.display(), "store initialized");

        Ok(Self::with_backends(ctx, cipher, vcs))
    }

    /// Turn the store into a git working tree for the context's remote.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` when remote, user or email is
    /// missing, and `SyncError` when git fails.
    pub fn init_git(&self, pull: bool) -> Result<()> {
        let url = validation::validate_field("git repository", &self.ctx.sync_remote)?;
        let user = validation::validate_field("git username", &self.ctx.sync_user)?;
        let email = validation::validate_field("git email", &self.ctx.sync_email)?;
        let branch = validation::validate_field("git branch", &self.ctx.sync_branch)?;

        let remote = Remote {
            url: &url,
            branch: &branch,
            user: &user,
            email: &email,
        };
        self.vcs.init(&self.root, &remote, pull)
    }

    /// Working tree status.
    pub fn status(&self) -> Result<String> {
        self.vcs.status(&self.root)
    }

    /// Pull the configured branch.
    pub fn pull(&self) -> Result<()> {
        self.vcs.pull(&self.root, &self.ctx.sync_branch)
    }

    /// Push the configured branch.
    pub fn push(&self) -> Result<()> {
        self.vcs.push(&self.root, &self.ctx.sync_branch)
    }

    /// Pull then push the configured branch.
    pub fn sync(&self) -> Result<()> {
        self.vcs.sync(&self.root, &self.ctx.sync_branch)
    }
}

/// Pick the identity that will encrypt the store.
///
/// A requested identity is accepted when it names one of the `available`
/// secret keys (key id or fingerprint suffix) and resolves to its key id.
/// Otherwise machine mode fails with `InvalidIdentity`, while interactive
/// mode lets the selector choose among all available keys.
pub fn choose_identity(
    available: &[Identity],
    requested: &str,
    selector: Option<&dyn Selector>,
) -> Result<String> {
    let requested = requested.trim();
    if let Some(found) = available.iter().find(|i| i.matches(requested)) {
        return Ok(found.key_id().to_string());
    }
    debug!(requested, available = available.len(), "identity not found");

    let Some(selector) = selector else {
        let shown = if requested.is_empty() {
            "no identity given".to_string()
        } else {
            requested.to_string()
        };
        return Err(CipherError::InvalidIdentity(shown).into());
    };
    if available.is_empty() {
        return Err(CipherError::InvalidIdentity("no secret keys available".to_string()).into());
    }

    let chosen = select::resolve_one(
        "identity",
        requested,
        available.to_vec(),
        |i| i.to_string(),
        Some(selector),
    )?;
    Ok(chosen.key_id().to_string())
}
