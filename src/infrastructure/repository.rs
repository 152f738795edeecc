//! Backing storage for the phone book

use crate::error::{PhonebookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract storage holding the serialized phone book
pub trait ContactRepository {
    /// Where the phone book lives (used for messages)
    fn location(&self) -> &Path;

    /// Check if the backing file exists
    fn exists(&self) -> bool;

    /// Read the whole phone book as text
    fn read(&self) -> Result<String>;

    /// Replace the whole phone book with `content`
    fn write(&self, content: &str) -> Result<()>;
}

/// Flat text file implementation of ContactRepository
#[derive(Debug, Clone)]
pub struct FlatFileRepository {
    pub path: PathBuf,
}

impl FlatFileRepository {
    /// Create a repository for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFileRepository { path: path.into() }
    }

    /// Create an empty phone book file.
    /// Fails if the file is already there.
    pub fn initialize(&self) -> Result<()> {
        if self.exists() {
            return Err(PhonebookError::AlreadyExists(self.path.clone()));
        }
        self.write("")
    }
}

impl ContactRepository for FlatFileRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<String> {
        debug!("Reading phone book from {}", self.path.display());
        fs::read_to_string(&self.path).map_err(PhonebookError::Io)
    }

    fn write(&self, content: &str) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        debug!(
            "Writing {} bytes to {}",
            content.len(),
            self.path.display()
        );
        fs::write(&self.path, content).map_err(PhonebookError::Io)
    }
}
