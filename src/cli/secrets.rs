//! Password file commands.
//!
//! Implements list, show, pass/user/url, delete, generate, insert, edit and
//! the `modify` family.

use tracing::info;

use crate::cli::session::Session;
use crate::cli::{output, prompt, views};
use crate::core::domain::{SecretRecord, StoreEntry};
use crate::core::password;
use crate::core::select;
use crate::core::store::{Change, Store};
use crate::error::{Result, SelectionError, ValidationError};

/// Resolve `filter` to a single password file.
fn pick(session: &Session, store: &Store, filter: &str) -> Result<StoreEntry> {
    let entries = store.list(filter)?;
    select::resolve_one(
        "password",
        filter,
        entries,
        |e| e.display_name(),
        session.selector(),
    )
}

fn rows(entries: &[StoreEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| vec![e.root_label().to_string(), e.label().to_string()])
        .collect()
}

/// List password files matching `filter`.
pub fn list(session: &Session, filter: &str) -> Result<()> {
    let store = session.open()?;
    let entries = store.list(filter)?;
    session.data(views::entries(&entries), || {
        output::table(&["Folder", "File"], &rows(&entries))
    })
}

/// Show every field of one password file.
pub fn show(session: &Session, filter: &str) -> Result<()> {
    let store = session.open()?;
    let entry = pick(session, &store, filter)?;
    let record = store.read(&entry)?;

    session.data(views::RecordView::from(&record), || {
        output::header(&entry.display_name());
        output::rule();
        output::kv("password", record.secret());
        output::kv("username", record.username());
        output::kv("url", record.url());
        if !record.comment().is_empty() {
            println!();
            for line in record.comment().lines() {
                println!("  {}", line);
            }
        }
    })
}

/// Which single field `field` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Password,
    Username,
    Url,
}

/// Print a single field of one password file, undecorated.
pub fn field(session: &Session, filter: &str, field: Field) -> Result<()> {
    let store = session.open()?;
    let entry = pick(session, &store, filter)?;
    let record = store.read(&entry)?;

    let (name, value) = match field {
        Field::Password => ("password", record.secret()),
        Field::Username => ("username", record.username()),
        Field::Url => ("url", record.url()),
    };
    if value.is_empty() {
        return Err(ValidationError::EmptyField(name.to_string()).into());
    }

    // Plain output for scripting - no decoration
    session.data(value, || println!("{}", value))
}

/// Delete one password file after confirmation.
pub fn delete(session: &Session, filter: &str) -> Result<()> {
    let store = session.open()?;
    let entry = pick(session, &store, filter)?;
    session.confirm(
        &format!("Delete password file {}?", output::path(&entry.display_name())),
        "delete",
    )?;

    info!("Deleting password file: {}", entry.display_name());
    store.delete(&entry)?;
    session.done(&format!("Password file <{}> has been deleted", entry.label()))
}

/// Values for a new password file, as given on the command line.
#[derive(Debug, Default)]
pub struct NewEntry<'a> {
    pub folder: &'a str,
    pub name: &'a str,
    pub user: &'a str,
    pub url: &'a str,
}

/// Where the password of a new file comes from.
#[derive(Debug, Clone, Copy)]
enum Source<'a> {
    Generated,
    Given(&'a str),
}

fn create(session: &Session, args: &NewEntry<'_>, source: Source<'_>) -> Result<()> {
    let store = session.open()?;
    let folders = store.folders()?;
    let folder = select::resolve_folder(&folders, args.folder, session.selector())?;

    let name = session.value(args.name, "Password name", None)?;
    let secret = match source {
        Source::Generated => password::generate(),
        Source::Given(given) => session.password(given)?,
    };
    let user = session.value(args.user, "User name", None)?;
    let url = session.value(args.url, "Site url", None)?;

    info!("Creating password file: {}/{}", folder.name(), name);
    let record = SecretRecord::new(name.as_str(), secret.as_str(), user, url, "");
    store.create(folder.name(), &name, &record)?;
    session.done("Password file created")
}

/// Create a password file with a generated password.
pub fn generate(session: &Session, args: &NewEntry<'_>) -> Result<()> {
    create(session, args, Source::Generated)
}

/// Create a password file with a given or prompted password.
pub fn insert(session: &Session, args: &NewEntry<'_>, password: &str) -> Result<()> {
    create(session, args, Source::Given(password))
}

/// Edit the whole decrypted body of one password file.
pub fn edit(session: &Session, filter: &str) -> Result<()> {
    if session.json {
        return Err(ValidationError::Interactive("edit".to_string()).into());
    }
    let store = session.open()?;
    let entry = pick(session, &store, filter)?;
    let body = store.read_raw(&entry)?;

    let Some(edited) = prompt::edit(&body)? else {
        return Err(SelectionError::Cancelled("edit".to_string()).into());
    };
    store.replace_raw(&entry, &edited)?;
    session.done(Change::Raw.message())
}

/// Single-field modification requested by `modify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modify<'a> {
    Username(&'a str),
    Url(&'a str),
    Comment(&'a str),
    GeneratePassword,
    InsertPassword(&'a str),
}

/// Modify one field of a password file, keeping the others.
pub fn modify(session: &Session, filter: &str, change: Modify<'_>) -> Result<()> {
    let store = session.open()?;
    let entry = pick(session, &store, filter)?;
    let record = store.read(&entry)?;

    let (updated, kind) = match change {
        Modify::Username(new) => {
            let new = session.value(new, "New username", Some(record.username()))?;
            (record.with_username(new), Change::Username)
        }
        Modify::Url(new) => {
            let new = session.value(new, "New url", Some(record.url()))?;
            (record.with_url(new), Change::Url)
        }
        Modify::Comment(new) => {
            let new = session.multiline(new, record.comment())?;
            (record.with_comment(new), Change::Comment)
        }
        Modify::GeneratePassword => {
            let new = password::generate();
            (record.with_secret(new.as_str()), Change::PasswordGenerated)
        }
        Modify::InsertPassword(new) => {
            let new = session.password(new)?;
            (record.with_secret(new.as_str()), Change::PasswordSaved)
        }
    };

    info!("Modifying {}: {}", entry.display_name(), kind.message());
    store.modify(&entry, &updated, kind)?;
    session.done(kind.message())
}
