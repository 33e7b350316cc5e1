//! Pouch - A personal GPG-backed password store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Initialize a context and its store
//! │   ├── secrets       # Show, create, modify, delete password files
//! │   ├── folders       # Folder listing and management
//! │   ├── git           # init-git and git status/pull/push/sync
//! │   ├── contexts      # Configured contexts
//! │   ├── session       # Context loading shared by commands
//! │   ├── prompt        # Interactive prompts and selector
//! │   ├── output        # Terminal and JSON output
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── codec         # Record <-> plaintext body
//!     ├── scanner       # Store tree -> ordered entries
//!     ├── config/       # ~/.pouchrc sections
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── gpg       # GnuPG implementation
//!     ├── git           # Version control backend
//!     ├── select        # Candidate resolution
//!     └── store/        # Secret engine
//! ```
//!
//! # Features
//!
//! - One GPG-encrypted file per password, with username, url and comment
//! - Folders and case-insensitive filtering
//! - Several independent stores ("contexts") in one config file
//! - Optional git sync after every change
//! - JSON output for scripting

pub mod cli;
pub mod core;
pub mod error;
