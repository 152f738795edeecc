//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "Terminal contact manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Phone book file (default: phone_book.txt)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Field delimiter used in the phone book file (default: ;)
    #[arg(short, long, global = true, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Config file (default: ./phonebook.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty phone book file
    Init,

    /// Show all contacts
    List,

    /// Add a contact
    Add {
        /// Contact name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Phone number (digits only, at most 11)
        #[arg(short, long)]
        phone: String,

        /// Free-form comment
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// Edit a contact; omitted name or comment keep their current value
    Edit {
        /// Contact id
        id: String,

        /// New name
        #[arg(short, long, default_value = "")]
        name: String,

        /// New phone number (digits only, at most 11)
        #[arg(short, long)]
        phone: String,

        /// New comment
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// Find contacts whose name, phone or comment contains KEYWORD (case-insensitive)
    Find {
        /// Search keyword (empty matches everything)
        #[arg(default_value = "")]
        keyword: String,
    },

    /// Delete a contact
    Delete {
        /// Contact id
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (file, delimiter)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
