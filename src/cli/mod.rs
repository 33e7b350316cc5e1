//! Command-line interface.

pub mod completions;
pub mod contexts;
pub mod folders;
pub mod git;
pub mod init;
pub mod output;
pub mod prompt;
pub mod secrets;
pub mod session;
pub mod views;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{CONFIG_ENV, DEFAULT_SECTION};
use crate::error::Result;

use self::git::GitAction;
use self::secrets::{Field, NewEntry};
use self::session::Session;

/// Pouch - A personal GPG-backed password store.
#[derive(Parser)]
#[command(
    name = "pouch",
    about = "A personal GPG-backed password store",
    version,
    after_help = "One file per password. Encrypted at rest. Synced with git."
)]
pub struct Cli {
    /// Context (config section) to use
    #[arg(short, long, global = true, default_value = DEFAULT_SECTION)]
    pub context: String,

    /// Answer yes to confirmations
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Print a JSON envelope instead of text; never prompts
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file [default: ~/.pouchrc]
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the store of the current context
    Init {
        /// Create a new section for the current context
        #[arg(long)]
        new_section: bool,
        /// Directory holding the password files
        #[arg(long)]
        path: Option<String>,
        /// GPG key id used for encryption
        #[arg(long, default_value = "")]
        identity: String,
        /// Edit the configuration file
        #[arg(long)]
        edit: bool,
    },

    /// Enable git sync for the current context
    InitGit {
        /// Remote repository
        #[arg(long, default_value = "")]
        repo: String,
        /// Commit author name
        #[arg(long, default_value = "")]
        user: String,
        /// Commit author email
        #[arg(long, default_value = "")]
        mail: String,
        /// Branch [default: main]
        #[arg(long, default_value = "")]
        branch: String,
        /// Pull an existing repository instead of creating one
        #[arg(long)]
        pull: bool,
    },

    /// List password files
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive name filter
        #[arg(default_value = "")]
        filter: String,
    },

    /// Show a password file
    Show {
        #[arg(default_value = "")]
        filter: String,
    },

    /// Print the password of a password file
    Pass {
        #[arg(default_value = "")]
        filter: String,
    },

    /// Print the username of a password file
    User {
        #[arg(default_value = "")]
        filter: String,
    },

    /// Print the url of a password file
    Url {
        #[arg(default_value = "")]
        filter: String,
    },

    /// Delete a password file
    #[command(visible_alias = "rm")]
    Delete {
        #[arg(default_value = "")]
        filter: String,
    },

    /// Create a password file with a generated password
    Generate {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Create a password file with a given password
    Insert {
        #[command(flatten)]
        entry: EntryArgs,
        /// Password (prompted when omitted)
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Edit a decrypted password file in $EDITOR
    Edit {
        #[arg(default_value = "")]
        filter: String,
    },

    /// Modify one field of a password file
    Modify {
        #[command(subcommand)]
        action: ModifyAction,
    },

    /// Manage folders
    Folders {
        #[command(subcommand)]
        action: Option<FolderAction>,
    },

    /// Git commands
    Git {
        #[command(subcommand)]
        action: GitCommand,
    },

    /// List configured contexts
    Contexts,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Fields of a new password file.
#[derive(clap::Args, Debug)]
pub struct EntryArgs {
    /// Folder (case-insensitive prefix)
    #[arg(long, default_value = "")]
    pub folder: String,
    /// Password file name
    #[arg(long, default_value = "")]
    pub name: String,
    /// Username
    #[arg(long, default_value = "")]
    pub user: String,
    /// Site url
    #[arg(long, default_value = "")]
    pub url: String,
}

impl EntryArgs {
    fn as_new_entry(&self) -> NewEntry<'_> {
        NewEntry {
            folder: &self.folder,
            name: &self.name,
            user: &self.user,
            url: &self.url,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Modify subcommands.
#[derive(Subcommand)]
pub enum ModifyAction {
    /// Change the username
    User {
        #[arg(default_value = "")]
        filter: String,
        /// New value (prompted when omitted)
        #[arg(long, default_value = "")]
        new: String,
    },

    /// Change the url
    Url {
        #[arg(default_value = "")]
        filter: String,
        #[arg(long, default_value = "")]
        new: String,
    },

    /// Change the comment (opens $EDITOR when omitted)
    Comment {
        #[arg(default_value = "")]
        filter: String,
        #[arg(long, default_value = "")]
        new: String,
    },

    /// Change the password
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },
}

/// Password modification subcommands.
#[derive(Subcommand)]
pub enum PasswordAction {
    /// Replace with a generated password
    Generate {
        #[arg(default_value = "")]
        filter: String,
    },

    /// Replace with a given password
    Insert {
        #[arg(default_value = "")]
        filter: String,
        #[arg(long, default_value = "")]
        new: String,
    },
}

/// Folder subcommands.
#[derive(Subcommand)]
pub enum FolderAction {
    /// List folders
    List,

    /// Create a folder
    Create {
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Delete a folder and all its content
    Delete {
        /// Folder (case-insensitive prefix)
        #[arg(long, default_value = "")]
        name: String,
    },
}

/// Git subcommands.
#[derive(Subcommand)]
pub enum GitCommand {
    /// Show the working tree status
    Status,
    /// Pull from origin
    Pull,
    /// Push to origin
    Push,
    /// Pull then push
    Sync,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let session = Session::new(&cli.context, cli.yes, cli.json, cli.config)?;
    let session = &session;

    match cli.command {
        Init {
            new_section,
            path,
            identity,
            edit,
        } => init::execute(
            session,
            &init::InitArgs {
                new_section,
                path: path.as_deref(),
                identity: &identity,
                edit,
            },
        ),
        InitGit {
            repo,
            user,
            mail,
            branch,
            pull,
        } => git::init(
            session,
            &git::InitGitArgs {
                repo: &repo,
                user: &user,
                mail: &mail,
                branch: &branch,
                pull,
            },
        ),
        List { filter } => secrets::list(session, &filter),
        Show { filter } => secrets::show(session, &filter),
        Pass { filter } => secrets::field(session, &filter, Field::Password),
        User { filter } => secrets::field(session, &filter, Field::Username),
        Url { filter } => secrets::field(session, &filter, Field::Url),
        Delete { filter } => secrets::delete(session, &filter),
        Generate { entry } => secrets::generate(session, &entry.as_new_entry()),
        Insert { entry, password } => secrets::insert(session, &entry.as_new_entry(), &password),
        Edit { filter } => secrets::edit(session, &filter),
        Modify { action } => match action {
            ModifyAction::User { filter, new } => {
                secrets::modify(session, &filter, secrets::Modify::Username(&new))
            }
            ModifyAction::Url { filter, new } => {
                secrets::modify(session, &filter, secrets::Modify::Url(&new))
            }
            ModifyAction::Comment { filter, new } => {
                secrets::modify(session, &filter, secrets::Modify::Comment(&new))
            }
            ModifyAction::Password { action } => match action {
                PasswordAction::Generate { filter } => {
                    secrets::modify(session, &filter, secrets::Modify::GeneratePassword)
                }
                PasswordAction::Insert { filter, new } => {
                    secrets::modify(session, &filter, secrets::Modify::InsertPassword(&new))
                }
            },
        },
        Folders { action } => match action.unwrap_or(FolderAction::List) {
            FolderAction::List => folders::list(session),
            FolderAction::Create { name } => folders::create(session, &name),
            FolderAction::Delete { name } => folders::delete(session, &name),
        },
        Git { action } => {
            let action = match action {
                GitCommand::Status => GitAction::Status,
                GitCommand::Pull => GitAction::Pull,
                GitCommand::Push => GitAction::Push,
                GitCommand::Sync => GitAction::Sync,
            };
            git::execute(session, action)
        }
        Contexts => contexts::execute(session),
        Completions { shell } => completions::execute(shell),
    }
}
