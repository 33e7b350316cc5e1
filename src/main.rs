//! Pouch - A personal GPG-backed password store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pouch::cli::output;
use pouch::cli::{execute, Cli};
use pouch::core::constants::LOG_ENV;

/// Exit status of a failed interactive command.
const FAILURE_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("pouch=debug")
        } else {
            EnvFilter::new("pouch=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    let json = cli.json;
    if let Err(e) = execute(cli) {
        // JSON failures travel in the envelope with exit status 0
        if json {
            output::json_error(&e.to_string());
            return;
        }

        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(FAILURE_EXIT);
    }
}
