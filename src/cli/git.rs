//! Git commands: `init-git` and `git status|pull|push|sync`.

use tracing::info;

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::store::Store;
use crate::error::Result;

/// Options of `pouch init-git`.
#[derive(Debug, Default)]
pub struct InitGitArgs<'a> {
    pub repo: &'a str,
    pub user: &'a str,
    pub mail: &'a str,
    pub branch: &'a str,
    pub pull: bool,
}

/// Configure sync for the selected context and initialize the repository.
pub fn init(session: &Session, args: &InitGitArgs<'_>) -> Result<()> {
    let mut ctx = session.load_context()?;

    ctx.sync_enabled = true;
    ctx.sync_remote = session.value(args.repo, "Git repository", None)?;
    ctx.sync_user = session.value_or(args.user, "Git username", &whoami::username())?;
    ctx.sync_email = session.value(args.mail, "Git email", None)?;
    if !args.branch.trim().is_empty() {
        ctx.sync_branch = args.branch.trim().to_string();
    }

    let store = Store::open(&session.context, ctx)?;
    session.save_context(store.context())?;

    info!(remote = %store.context().sync_remote, pull = args.pull, "initializing git");
    store.init_git(args.pull)?;
    session.done("Git initialized")
}

/// Which `git` subcommand to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitAction {
    Status,
    Pull,
    Push,
    Sync,
}

/// Run a git action on the selected context's store.
pub fn execute(session: &Session, action: GitAction) -> Result<()> {
    let store = session.open()?;
    let branch = store.context().sync_branch.clone();

    match action {
        GitAction::Status => {
            let status = store.status()?;
            session.data(&status, || print!("{}", status))
        }
        GitAction::Pull => {
            store.pull()?;
            session.done(&format!("pulled {}", output::path(&format!("origin/{}", branch))))
        }
        GitAction::Push => {
            store.push()?;
            session.done(&format!("pushed {}", output::path(&format!("origin/{}", branch))))
        }
        GitAction::Sync => {
            store.sync()?;
            session.done(&format!("synced {}", output::path(&format!("origin/{}", branch))))
        }
    }
}
