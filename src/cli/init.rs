//! Init command - initialize a context and its store.

use std::fs;

use tracing::info;

use crate::cli::session::Session;
use crate::cli::{output, prompt};
use crate::core::cipher::{Cipher, Gpg};
use crate::core::config::{self, IniDocument};
use crate::core::constants;
use crate::core::domain::StoreContext;
use crate::core::git::Git;
use crate::core::store::{choose_identity, Store};
use crate::error::{ConfigError, Result, SelectionError, ValidationError};

/// Options of `pouch init`.
#[derive(Debug, Default)]
pub struct InitArgs<'a> {
    pub new_section: bool,
    pub path: Option<&'a str>,
    pub identity: &'a str,
    pub edit: bool,
}

/// Initialize the selected context.
pub fn execute(session: &Session, args: &InitArgs<'_>) -> Result<()> {
    if args.edit {
        return edit_config(session);
    }

    let path = session.config_path();
    config::bootstrap(path)?;
    if args.new_section {
        config::create_section(path, &session.context, &StoreContext::default())?;
    }
    let mut ctx = session.load_context()?;

    let store_path = match args.path {
        Some(p) if !p.trim().is_empty() => p.trim().to_string(),
        _ if !ctx.path.trim().is_empty() && !args.new_section => ctx.path.clone(),
        _ => constants::default_store_path(&session.context)
            .ok_or(ConfigError::NoHome)?
            .display()
            .to_string(),
    };

    let available = Gpg.identities()?;
    let identity = choose_identity(&available, args.identity, session.selector())?;

    info!(context = %session.context, path = %store_path, "initializing store");
    ctx.path = store_path;
    ctx.identity = identity;
    let store = Store::init(ctx, Box::new(Gpg), Box::new(Git))?;
    session.save_context(store.context())?;

    if !session.json {
        output::kv("context", &session.context);
        output::kv("path", output::path(&store.context().path));
        output::kv("identity", &store.context().identity);
    }
    session.done("Application initialized")
}

/// Open the configuration file in the editor; the result must parse.
fn edit_config(session: &Session) -> Result<()> {
    if session.json {
        return Err(ValidationError::Interactive("config edit".to_string()).into());
    }
    let path = session.config_path();
    config::bootstrap(path)?;
    let current = fs::read_to_string(path)?;

    let Some(edited) = prompt::edit(&current)? else {
        return Err(SelectionError::Cancelled("config edit".to_string()).into());
    };
    IniDocument::parse(&edited)?;
    fs::write(path, edited).map_err(ConfigError::Write)?;

    session.done(&format!("saved {}", output::path(&path.display().to_string())))
}
