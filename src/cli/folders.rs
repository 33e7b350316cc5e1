//! Folder commands.

use tracing::info;

use crate::cli::session::Session;
use crate::cli::{output, views};
use crate::core::select;
use crate::error::Result;

/// List top-level folders.
pub fn list(session: &Session) -> Result<()> {
    let store = session.open()?;
    let folders = store.folders()?;
    session.data(views::folders(&folders), || {
        let rows: Vec<Vec<String>> = folders.iter().map(|f| vec![f.name().to_string()]).collect();
        output::table(&["Folder"], &rows)
    })
}

/// Create a top-level folder.
pub fn create(session: &Session, name: &str) -> Result<()> {
    let store = session.open()?;
    let name = session.value(name, "Name", None)?;
    info!("Creating folder: {}", name);
    store.create_folder(&name)?;
    session.done(&format!("Folder <{}> has been created", name))
}

/// Delete a folder and its content, selected by name prefix.
pub fn delete(session: &Session, name: &str) -> Result<()> {
    let store = session.open()?;
    let folders = store.folders()?;
    let folder = select::resolve_folder(&folders, name, session.selector())?;
    session.confirm(
        &format!(
            "Delete folder {} and all its content?",
            output::path(folder.name())
        ),
        "delete",
    )?;

    info!("Deleting folder: {}", folder.name());
    store.delete_folder(folder.name())?;
    session.done(&format!("Folder <{}> has been deleted", folder.name()))
}
