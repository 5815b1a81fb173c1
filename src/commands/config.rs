//! Config command - inspect or create ~/.railfence/config.toml.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use railfence::Config;

use super::{load_config, CommandExecutor};

/// Manage the default rail count, method and lab settings.
///
/// Settings are stored in ~/.railfence/config.toml. Command-line flags
/// always take precedence.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a config file with the default settings
    Init(ConfigInitArgs),

    /// Print the config file path
    Path,
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Show => {
                let config = load_config()?;
                print!("{}", config.to_toml()?);
            }
            ConfigAction::Init(args) => {
                let path = Config::config_path()?;
                if path.exists() && !args.force {
                    bail!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
                let path = Config::default()
                    .save()
                    .context("Failed to write config file")?;
                println!("Wrote {}", path.display());
            }
            ConfigAction::Path => {
                println!("{}", Config::config_path()?.display());
            }
        }

        Ok(())
    }
}
