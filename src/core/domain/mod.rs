//! Domain types.

mod context;
mod entry;
mod identity;
mod record;

pub use context::{Field, FieldKind, StoreContext, SCHEMA};
pub use entry::{FolderEntry, StoreEntry};
pub use identity::Identity;
pub use record::SecretRecord;
