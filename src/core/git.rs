//! Version control synchronization.
//!
//! A store directory can be a git working tree pushed to a remote. Every
//! call shells out to `git -C <store>`; failures carry git's stderr.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::{Result, SyncError};

/// Remote repository settings used by [`VersionControl::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote<'a> {
    pub url: &'a str,
    pub branch: &'a str,
    pub user: &'a str,
    pub email: &'a str,
}

/// Version control backend.
pub trait VersionControl {
    /// Turn `path` into a working tree tracking `remote`.
    ///
    /// With `pull`, the remote branch is fetched into the tree; otherwise
    /// the branch is created locally with an empty `.gitignore` and pushed
    /// as the initial commit.
    fn init(&self, path: &Path, remote: &Remote<'_>, pull: bool) -> Result<()>;

    /// Pull `branch` from `origin`.
    fn pull(&self, path: &Path, branch: &str) -> Result<()>;

    /// Push `branch` to `origin`, setting upstream.
    fn push(&self, path: &Path, branch: &str) -> Result<()>;

    /// Stage everything, commit with `message`, then push.
    fn commit(&self, path: &Path, message: &str, branch: &str) -> Result<()>;

    /// Human-readable working tree status.
    fn status(&self, path: &Path) -> Result<String>;

    /// Pull then push.
    fn sync(&self, path: &Path, branch: &str) -> Result<()> {
        self.pull(path, branch)?;
        self.push(path, branch)
    }
}

/// git CLI backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git;

impl Git {
    fn check_git() -> Result<()> {
        which::which("git").map_err(|_| {
            SyncError::Unavailable("git CLI not found. Install git and retry.".to_string())
        })?;
        Ok(())
    }

    /// Run `git -C path <args>` and return its stdout.
    fn run(path: &Path, args: &[&str]) -> Result<String> {
        Self::check_git()?;
        let command = args.first().copied().unwrap_or_default().to_string();
        trace!(path = %path.display(), ?args, "running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SyncError::CommandFailed {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            return Err(SyncError::CommandFailed {
                command,
                stderr: if stderr.is_empty() { stdout } else { stderr },
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for Git {
    fn init(&self, path: &Path, remote: &Remote<'_>, pull: bool) -> Result<()> {
        debug!(path = %path.display(), url = remote.url, branch = remote.branch, pull, "git init");
        Self::run(path, &["init"])?;
        Self::run(path, &["config", "user.name", remote.user])?;
        Self::run(path, &["config", "user.email", remote.email])?;
        Self::run(path, &["remote", "add", "origin", remote.url])?;

        if pull {
            return self.pull(path, remote.branch);
        }

        Self::run(path, &["branch", "-M", remote.branch])?;
        fs::write(path.join(".gitignore"), "")?;
        self.commit(path, "Initial commit", remote.branch)
    }

    fn pull(&self, path: &Path, branch: &str) -> Result<()> {
        debug!(path = %path.display(), branch, "git pull");
        Self::run(path, &["pull", "origin", branch]).map(|_| ())
    }

    fn push(&self, path: &Path, branch: &str) -> Result<()> {
        debug!(path = %path.display(), branch, "git push");
        Self::run(path, &["push", "-u", "origin", branch]).map(|_| ())
    }

    fn commit(&self, path: &Path, message: &str, branch: &str) -> Result<()> {
        debug!(path = %path.display(), message, "git commit");
        Self::run(path, &["add", "."])?;
        // A clean tree makes `git commit` exit non-zero; still push.
        let clean = Self::run(path, &["status", "--porcelain"])?.trim().is_empty();
        if !clean {
            Self::run(path, &["commit", "-m", message])?;
        }
        self.push(path, branch)
    }

    fn status(&self, path: &Path) -> Result<String> {
        Self::run(path, &["status"])
    }
}
