//! Interactive prompts.
//!
//! Thin wrappers over dialoguer. Every prompt refuses to run without a
//! terminal on stdin instead of blocking.

use std::io::{self, IsTerminal};

use dialoguer::{Confirm, Editor, Input, Password, Select};
use zeroize::Zeroizing;

use crate::core::select::Selector;
use crate::error::{Result, SelectionError, ValidationError};

fn require_terminal(what: &str) -> Result<()> {
    if !io::stdin().is_terminal() {
        return Err(ValidationError::Interactive(what.to_string()).into());
    }
    Ok(())
}

/// Selector backed by a dialoguer list.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerSelector;

impl Selector for DialoguerSelector {
    fn select_one(&self, prompt: &str, items: &[String]) -> Result<usize> {
        require_terminal(prompt)?;
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?
            .ok_or_else(|| SelectionError::Cancelled(prompt.to_string()).into())
    }
}

/// Ask for a single-line value. `current` is shown when modifying.
pub fn text(label: &str, current: Option<&str>) -> Result<String> {
    require_terminal(label)?;
    if let Some(current) = current {
        println!("Current value: {}", current);
    }
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Ask for a single-line value with a default.
pub fn text_or(label: &str, default: &str) -> Result<String> {
    require_terminal(label)?;
    let value: String = Input::new()
        .with_prompt(label)
        .default(default.to_string())
        .interact_text()?;
    Ok(value)
}

/// Ask for a password twice, hidden.
///
/// # Errors
///
/// Returns `ValidationError::PasswordMismatch` when both entries differ.
pub fn password() -> Result<Zeroizing<String>> {
    require_terminal("password")?;
    let first = Zeroizing::new(
        Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    );
    let second = Zeroizing::new(
        Password::new()
            .with_prompt("Confirm password")
            .allow_empty_password(true)
            .interact()?,
    );
    if *first != *second {
        return Err(ValidationError::PasswordMismatch.into());
    }
    Ok(first)
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> Result<bool> {
    require_terminal(question)?;
    Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()
        .map_err(Into::into)
}

/// Open `text` in `$EDITOR`. `None` when the editor exits without saving.
pub fn edit(text: &str) -> Result<Option<String>> {
    require_terminal("editor")?;
    Ok(Editor::new().edit(text)?)
}
