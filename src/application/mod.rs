//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod store;

pub use manage_config::ConfigService;
pub use store::{ContactStore, Contacts};
