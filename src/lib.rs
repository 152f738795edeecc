//! phonebook - Terminal contact manager
//!
//! Keeps a flat, delimiter-separated contacts file in memory and offers
//! add/edit/find/delete through an interactive menu or one-shot subcommands.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PhonebookError;
