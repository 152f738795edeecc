//! CLI layer - Command-line interface and interactive menu

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::{Cli, Commands};
pub use menu::{MenuCommand, MenuSession};
pub use output::{format_command_error, format_contact_table, format_message};
