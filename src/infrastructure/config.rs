//! Configuration management

use crate::domain::validate_delimiter;
use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Name of the config file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "phonebook.toml";

/// Phone book file used when nothing else is configured
pub const DEFAULT_FILE: &str = "phone_book.txt";

/// Field delimiter used when nothing else is configured
pub const DEFAULT_DELIMITER: char = ';';

pub const FILE_ENV: &str = "PHONEBOOK_FILE";
pub const DELIMITER_ENV: &str = "PHONEBOOK_DELIMITER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the phone book file
    pub file: PathBuf,
    /// Character separating name, phone and comment on disk
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::from(DEFAULT_FILE),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PhonebookError::Config(format!("Config file not found: {}", path.display()))
            } else {
                PhonebookError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            PhonebookError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a TOML file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the config file to use: the explicit one if given, otherwise
    /// `phonebook.toml` in `dir` when it exists.
    pub fn config_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                candidate.is_file().then_some(candidate)
            }
        }
    }

    /// Build the effective config: defaults, then the config file (if any),
    /// then environment variables.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let mut config = match Self::config_path(explicit, &current_dir) {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Like [`Config::discover`], but a missing or broken config file or a bad
    /// environment value falls back to the defaults instead of failing.
    /// Used by the `config` command so it can create or repair the file.
    pub fn discover_lenient(explicit: Option<&Path>) -> Self {
        Self::discover(explicit).unwrap_or_else(|e| {
            warn!("Ignoring configuration: {}", e);
            let mut config = Config::default();
            if let Err(e) = config.apply_env(|key| std::env::var(key).ok()) {
                warn!("Ignoring environment overrides: {}", e);
                config = Config::default();
            }
            config
        })
    }

    /// Apply `PHONEBOOK_FILE` / `PHONEBOOK_DELIMITER` overrides using `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = lookup(FILE_ENV).filter(|v| !v.is_empty()) {
            self.file = PathBuf::from(file);
        }
        if let Some(delimiter) = lookup(DELIMITER_ENV).filter(|v| !v.is_empty()) {
            self.delimiter = parse_delimiter(&delimiter)?;
        }
        Ok(())
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, file: Option<PathBuf>, delimiter: Option<char>) -> Result<Self> {
        if let Some(file) = file {
            self.file = file;
        }
        if let Some(delimiter) = delimiter {
            self.delimiter = delimiter;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        validate_delimiter(self.delimiter)
    }
}

/// Parse a delimiter given as text; it must be exactly one usable character
pub fn parse_delimiter(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            validate_delimiter(c)?;
            Ok(c)
        }
        _ => Err(PhonebookError::Config(format!(
            "Delimiter must be a single character, got '{}'",
            value
        ))),
    }
}
