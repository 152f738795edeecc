//! Error types for phonebook

use crate::domain::ContactId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for phonebook application
#[derive(Debug, Error)]
pub enum PhonebookError {
    #[error("Phone book is already opened")]
    AlreadyOpen,

    #[error("Phone book is not opened")]
    NotOpen,

    #[error("Phone number is too long: {len} characters (at most 11 allowed)")]
    PhoneTooLong { len: usize },

    #[error("Phone number must contain only digits: '{0}'")]
    PhoneNotDigits(String),

    #[error("Field '{field}' must not contain the delimiter '{delimiter}' or a line break")]
    DelimiterInField { field: &'static str, delimiter: char },

    #[error("Invalid contact id: '{0}'")]
    InvalidId(String),

    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error("Malformed record on line {line}: expected 3 fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },

    #[error("Phone book file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PhonebookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PhonebookError::AlreadyOpen | PhonebookError::NotOpen => 2,
            PhonebookError::PhoneTooLong { .. }
            | PhonebookError::PhoneNotDigits(_)
            | PhonebookError::DelimiterInField { .. }
            | PhonebookError::InvalidId(_) => 3,
            PhonebookError::NotFound(_) => 4,
            PhonebookError::MalformedRecord { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PhonebookError::NotOpen => "Phone book is not opened. \
                Please open the phone book first (menu item 1)."
                .to_string(),
            PhonebookError::AlreadyOpen => "Phone book is already opened. \
                Restart the program to reload it from disk."
                .to_string(),
            PhonebookError::PhoneTooLong { .. } => {
                format!("{}\n\nPhone number should not exceed 11 digits.", self)
            }
            PhonebookError::PhoneNotDigits(_) => {
                format!(
                    "{}\n\nPhone number should contain only digits \
                    and must not be empty.",
                    self
                )
            }
            PhonebookError::NotFound(id) => {
                format!(
                    "No contact with id {}\n\n\
                    Suggestions:\n\
                    • Show all contacts to see the available ids\n\
                    • Use find to look a contact up by name, phone or comment",
                    id
                )
            }
            PhonebookError::InvalidId(raw) => {
                format!(
                    "Invalid contact id: '{}'\n\n\
                    Contact ids are positive whole numbers (e.g., 1, 2, 3)",
                    raw
                )
            }
            PhonebookError::MalformedRecord { line, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Every line must look like: name;phone;comment\n\
                    • Check line {} of the phone book file\n\
                    • Check that the configured delimiter matches the file",
                    self, line
                )
            }
            PhonebookError::AlreadyExists(path) => {
                format!(
                    "Phone book file already exists: {}\n\n\
                    Use 'phonebook list' to see its contacts",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PhonebookError
pub type Result<T> = std::result::Result<T, PhonebookError>;
