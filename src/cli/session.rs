//! Command session.
//!
//! Global flags plus everything commands share: locating the config file,
//! opening the selected context's store, prompting for missing values
//! (or refusing to in `--json` mode) and reporting results.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::prompt::{self, DialoguerSelector};
use crate::cli::output;
use crate::core::config;
use crate::core::domain::StoreContext;
use crate::core::select::Selector;
use crate::core::store::Store;
use crate::core::validation;
use crate::error::{Result, SelectionError, ValidationError};

/// Global options shared by every command.
#[derive(Debug)]
pub struct Session {
    pub context: String,
    pub yes: bool,
    pub json: bool,
    config_path: PathBuf,
    selector: DialoguerSelector,
}

impl Session {
    /// Build a session. The config path defaults to `~/.pouchrc`.
    pub fn new(context: &str, yes: bool, json: bool, config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => config::locate()?,
        };
        Ok(Self {
            context: context.to_string(),
            yes,
            json,
            config_path,
            selector: DialoguerSelector,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the selected context, creating the config file on first use.
    pub fn load_context(&self) -> Result<StoreContext> {
        if config::bootstrap(&self.config_path)? {
            debug!(path = %self.config_path.display(), "config file created");
        }
        config::load(&self.config_path, &self.context)
    }

    /// Persist `ctx` under the selected context.
    pub fn save_context(&self, ctx: &StoreContext) -> Result<()> {
        config::save(&self.config_path, &self.context, ctx)
    }

    /// Open the store of the selected context.
    ///
    /// In interactive mode, warns when the context does not sync.
    pub fn open(&self) -> Result<Store> {
        let ctx = self.load_context()?;
        let store = Store::open(&self.context, ctx)?;
        if !self.json && !store.context().sync_enabled {
            output::warn("git is not configured");
            println!();
        }
        Ok(store)
    }

    /// Selector for ambiguous choices; none in JSON mode.
    pub fn selector(&self) -> Option<&dyn Selector> {
        if self.json {
            None
        } else {
            Some(&self.selector)
        }
    }

    /// Confirm a destructive action. `--yes` and `--json` skip the question.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Cancelled` when the user declines.
    pub fn confirm(&self, question: &str, action: &str) -> Result<()> {
        if self.yes || self.json {
            return Ok(());
        }
        if prompt::confirm(question)? {
            Ok(())
        } else {
            Err(SelectionError::Cancelled(action.to_string()).into())
        }
    }

    /// A required single-line value: `given` when non-blank, otherwise a
    /// prompt (interactive) or `EmptyField` (JSON).
    pub fn value(&self, given: &str, label: &str, current: Option<&str>) -> Result<String> {
        if !given.trim().is_empty() {
            return Ok(given.trim().to_string());
        }
        if self.json {
            return Err(ValidationError::EmptyField(label.to_string()).into());
        }
        let entered = prompt::text(label, current)?;
        validation::validate_field(label, &entered)
    }

    /// Like [`Session::value`], with `default` pre-filled in the prompt.
    pub fn value_or(&self, given: &str, label: &str, default: &str) -> Result<String> {
        if !given.trim().is_empty() {
            return Ok(given.trim().to_string());
        }
        if self.json {
            return Err(ValidationError::EmptyField(label.to_string()).into());
        }
        let entered = prompt::text_or(label, default)?;
        validation::validate_field(label, &entered)
    }

    /// A required password: `given` when non-blank, otherwise a confirmed
    /// hidden prompt (interactive) or `EmptyField` (JSON).
    pub fn password(&self, given: &str) -> Result<Zeroizing<String>> {
        if !given.trim().is_empty() {
            return Ok(Zeroizing::new(given.trim().to_string()));
        }
        if self.json {
            return Err(ValidationError::EmptyField("password".to_string()).into());
        }
        let entered = prompt::password()?;
        let trimmed = validation::validate_field("password", &entered)?;
        Ok(Zeroizing::new(trimmed))
    }

    /// A free-form multi-line value: `given` when non-blank; otherwise the
    /// editor opened on `current` (interactive) or empty (JSON).
    pub fn multiline(&self, given: &str, current: &str) -> Result<String> {
        if !given.trim().is_empty() || self.json {
            return Ok(given.trim().to_string());
        }
        match prompt::edit(current)? {
            Some(edited) => Ok(edited.trim_end_matches('\n').to_string()),
            None => Err(SelectionError::Cancelled("edit".to_string()).into()),
        }
    }

    /// Report a completed action.
    pub fn done(&self, message: &str) -> Result<()> {
        if self.json {
            output::json_success(message, serde_json::json!({}))
        } else {
            output::success(message);
            Ok(())
        }
    }

    /// Report data: JSON envelope, or `render` for the terminal.
    pub fn data<T: Serialize>(&self, data: T, render: impl FnOnce()) -> Result<()> {
        if self.json {
            output::json_success("", data)
        } else {
            render();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn session(tmp: &TempDir, json: bool) -> Session {
        Session::new("DEFAULT", false, json, Some(tmp.path().join(".pouchrc"))).unwrap()
    }

    #[test]
    fn test_json_mode_never_prompts() {
        let tmp = TempDir::new().unwrap();
        let s = session(&tmp, true);
        assert!(matches!(
            s.value("", "Git email", None),
            Err(Error::Validation(ValidationError::EmptyField(_)))
        ));
        assert!(s.password("  ").is_err());
        assert_eq!(s.multiline("", "old").unwrap(), "");
        assert!(s.confirm("Delete?", "delete").is_ok());
        assert!(s.selector().is_none());
    }

    #[test]
    fn test_given_values_are_trimmed() {
        let tmp = TempDir::new().unwrap();
        let s = session(&tmp, false);
        assert_eq!(s.value(" alice ", "User name", None).unwrap(), "alice");
        assert_eq!(*s.password(" hunter2 ").unwrap(), "hunter2");
        assert!(s.selector().is_some());
    }

    #[test]
    fn test_open_bootstraps_config_then_reports_uninitialized() {
        let tmp = TempDir::new().unwrap();
        let s = session(&tmp, true);
        let err = s.open().unwrap_err();
        assert!(tmp.path().join(".pouchrc").exists());
        assert!(matches!(
            err,
            Error::Config(crate::error::ConfigError::NotInitialized { .. })
        ));
    }
}
