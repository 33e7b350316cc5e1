//! Contexts command - list configured contexts.

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::config;
use crate::core::constants::DEFAULT_SECTION;
use crate::error::Result;

/// List `DEFAULT` and every named section, marking the selected one.
pub fn execute(session: &Session) -> Result<()> {
    config::bootstrap(session.config_path())?;
    let mut names = vec![DEFAULT_SECTION.to_string()];
    names.extend(config::list_sections(session.config_path())?);

    session.data(&names, || {
        for name in &names {
            if *name == session.context {
                println!("{} {}", output::cmd("*"), name);
            } else {
                println!("  {}", name);
            }
        }
    })
}
