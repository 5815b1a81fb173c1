//! User defaults for the CLI, stored in `~/.railfence/config.toml`.
//!
//! Every key is optional; missing keys and a missing file fall back to the
//! built-in defaults. Command-line flags always override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cipher::Method;
use crate::encoder::EncryptConfig;
use crate::error::RailFenceError;
use crate::lab::RailRange;
use crate::DEFAULT_RAILS;

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Defaults for the lab commands.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LabConfig {
    /// Smallest rail count tried by brute force.
    pub min_rails: usize,
    /// Largest rail count tried by brute force.
    pub max_rails: usize,
    /// Try zigzag as well as sequential.
    pub both_methods: bool,
}

impl Default for LabConfig {
    fn default() -> Self {
        let range = RailRange::default();
        Self {
            min_rails: range.min,
            max_rails: range.max,
            both_methods: true,
        }
    }
}

/// The CLI configuration stored in TOML format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default rail count.
    pub rails: usize,
    /// Default method.
    pub method: Method,
    /// Remove whitespace before encrypting.
    pub remove_space: bool,
    /// Remove symbols before encrypting.
    pub remove_symbol: bool,
    pub lab: LabConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rails: DEFAULT_RAILS,
            method: Method::default(),
            remove_space: false,
            remove_symbol: false,
            lab: LabConfig::default(),
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// Returns the defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from `path`, or the defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Normalization options for encryption.
    pub fn encrypt_config(&self) -> EncryptConfig {
        EncryptConfig {
            remove_space: self.remove_space,
            remove_symbol: self.remove_symbol,
        }
    }

    /// Brute-force rail range.
    pub fn rail_range(&self) -> Result<RailRange, RailFenceError> {
        RailRange::new(self.lab.min_rails, self.lab.max_rails)
    }
}

/// Get the railfence config directory (`~/.railfence`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".railfence"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.rails, 3);
        assert_eq!(config.method, Method::Sequential);
        assert!(!config.remove_space);
        assert_eq!(config.rail_range().unwrap(), RailRange { min: 2, max: 10 });
        assert!(config.lab.both_methods);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str("rails = 5\nmethod = \"zigzag\"\n").unwrap();
        assert_eq!(config.rails, 5);
        assert_eq!(config.method, Method::Zigzag);
        assert_eq!(config.lab, LabConfig::default());
    }

    #[test]
    fn test_partial_lab_table() {
        let config: Config = toml::from_str("[lab]\nmax_rails = 6\n").unwrap();
        assert_eq!(config.lab.min_rails, 2);
        assert_eq!(config.lab.max_rails, 6);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            rails: 4,
            method: Method::Zigzag,
            remove_space: true,
            remove_symbol: true,
            lab: LabConfig {
                min_rails: 3,
                max_rails: 7,
                both_methods: false,
            },
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.encrypt_config(),
            EncryptConfig {
                remove_space: true,
                remove_symbol: true
            }
        );
    }

    #[test]
    fn test_invalid_method_is_parse_error() {
        let result: Result<Config, _> = toml::from_str("method = \"spiral\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_lab_range() {
        let config: Config = toml::from_str("[lab]\nmin_rails = 9\nmax_rails = 3\n").unwrap();
        assert!(config.rail_range().is_err());
    }
}
