//! User configuration loaded from `<config_dir>/reckon/config.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::calculator::{DEFAULT_PRECISION, DisplayOptions};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places shown for results.
    pub precision: u32,
    /// Group thousands in displayed results.
    pub thousands_separator: bool,
    /// Copy every successful result to the clipboard.
    pub copy_result: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            thousands_separator: false,
            copy_result: false,
        }
    }
}

impl Config {
    /// Location of the config file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("reckon").join("config.toml"))
    }

    /// Load the config from its default location.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            precision: self.precision,
            thousands_separator: self.thousands_separator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("reckon-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("precision = 5").unwrap();
        assert_eq!(config.precision, 5);
        assert!(!config.thousands_separator);
        assert!(!config.copy_result);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display_options(), DisplayOptions::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load_from(&temp_path("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("valid.toml");
        fs::write(&path, "precision = 2\nthousands_separator = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            config.display_options(),
            DisplayOptions {
                precision: 2,
                thousands_separator: true,
            }
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed.toml");
        fs::write(&path, "precision = \"three\"\n").unwrap();

        let result = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
