//! Config management use case

use crate::error::{PhonebookError, Result};
use crate::infrastructure::{parse_delimiter, Config};
use std::path::PathBuf;
use tracing::warn;

/// Service for reading and updating the config file
pub struct ConfigService {
    path: PathBuf,
    config: Config,
}

impl ConfigService {
    /// Create a service editing the config file at `path`.
    /// `config` holds the effective values shown by `get`/`list`.
    pub fn new(path: PathBuf, config: Config) -> Self {
        ConfigService { path, config }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "file" => Ok(self.config.file.display().to_string()),
            "delimiter" => Ok(self.config.delimiter.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a value and persist it to the config file.
    /// Only values stored in the file are written, not env or flag overrides.
    /// A file that no longer parses is replaced, starting from defaults.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut stored = if self.path.is_file() {
            Config::load_from(&self.path).unwrap_or_else(|e| {
                warn!("Replacing unreadable config {}: {}", self.path.display(), e);
                Config::default()
            })
        } else {
            Config::default()
        };

        match key {
            "file" => {
                if value.is_empty() {
                    return Err(PhonebookError::Config(
                        "Phone book file path cannot be empty".to_string(),
                    ));
                }
                stored.file = PathBuf::from(value);
                self.config.file = stored.file.clone();
            }
            "delimiter" => {
                stored.delimiter = parse_delimiter(value)?;
                self.config.delimiter = stored.delimiter;
            }
            _ => return Err(unknown_key(key)),
        }

        stored.save_to(&self.path)
    }

    /// List all config values
    pub fn list(&self) -> &Config {
        &self.config
    }
}

fn unknown_key(key: &str) -> PhonebookError {
    PhonebookError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: file, delimiter",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(temp.path().join("phonebook.toml"), Config::default())
    }

    #[test]
    fn test_get_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("file").unwrap(), "phone_book.txt");
        assert_eq!(service.get("delimiter").unwrap(), ";");
        assert!(service.get("color").is_err());
    }

    #[test]
    fn test_set_writes_config_file() {
        let temp = TempDir::new().unwrap();
        let mut service = service(&temp);

        service.set("delimiter", "|").unwrap();
        service.set("file", "work.txt").unwrap();

        let stored = Config::load_from(&temp.path().join("phonebook.toml")).unwrap();
        assert_eq!(stored.delimiter, '|');
        assert_eq!(stored.file, PathBuf::from("work.txt"));
        assert_eq!(service.get("delimiter").unwrap(), "|");
    }

    #[test]
    fn test_set_keeps_other_stored_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("phonebook.toml");
        fs::write(&path, "file = \"kept.txt\"\n").unwrap();

        let mut service = ConfigService::new(path.clone(), Config::default());
        service.set("delimiter", ",").unwrap();

        let stored = Config::load_from(&path).unwrap();
        assert_eq!(stored.file, PathBuf::from("kept.txt"));
        assert_eq!(stored.delimiter, ',');
    }

    #[test]
    fn test_set_repairs_broken_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("phonebook.toml");
        fs::write(&path, "delimiter = \"12\"\n").unwrap();

        let mut service = ConfigService::new(path.clone(), Config::default());
        service.set("delimiter", "|").unwrap();

        assert_eq!(Config::load_from(&path).unwrap().delimiter, '|');
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let mut service = service(&temp);

        assert!(service.set("delimiter", "ab").is_err());
        assert!(service.set("delimiter", "1").is_err());
        assert!(service.set("file", "").is_err());
        assert!(service.set("color", "red").is_err());
        assert!(!temp.path().join("phonebook.toml").exists());
    }
}
