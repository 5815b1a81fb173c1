//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod brute_force;
mod config;
mod decrypt;
mod encrypt;
mod input;
mod playback;
mod stats;

pub use brute_force::BruteForceCommand;
pub use config::ConfigCommand;
pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;
pub use stats::StatsCommand;

use anyhow::{Context, Result};
use tracing::warn;

use railfence::{Config, ConfigError, Method};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Loads the user configuration, falling back to defaults when there is no
/// home directory to read it from.
pub(crate) fn load_config() -> Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(ConfigError::NoConfigDir) => {
            warn!("no home directory; using built-in defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e).context("Failed to load ~/.railfence/config.toml"),
    }
}

/// Resolves the method flag, defaulting to the configured method.
pub(crate) fn resolve_method(flag: Option<&str>, config: &Config) -> Result<Method> {
    match flag {
        Some(name) => Ok(name.parse::<Method>()?),
        None => Ok(config.method),
    }
}

