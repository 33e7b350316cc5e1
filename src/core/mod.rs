//! Core library components.
//!
//! This module contains the reusable business logic for the password store:
//! record encoding, store scanning, configuration contexts, encryption and
//! synchronization. Nothing here prints or exits.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod domain;
pub mod git;
pub mod password;
pub mod scanner;
pub mod select;
pub mod store;
pub mod validation;
