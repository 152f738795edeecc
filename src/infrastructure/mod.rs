//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{parse_delimiter, Config};
pub use repository::{ContactRepository, FlatFileRepository};
