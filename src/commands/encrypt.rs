//! Encrypt command - lay text out on rails and read it back rail by rail.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use railfence::{encrypt_with_config, export_text, grid_lines, Direction};

use super::input::TextInput;
use super::playback::Playback;
use super::{load_config, resolve_method, CommandExecutor};

/// Encrypt text with the rail-fence cipher.
///
/// Line breaks are always removed before encrypting. Defaults for the rail
/// count, method and cleaning options come from ~/.railfence/config.toml.
#[derive(Args, Debug)]
pub struct EncryptCommand {
    #[command(flatten)]
    pub input: TextInput,

    /// Number of rails
    #[arg(short, long)]
    pub rails: Option<usize>,

    /// Method: sequential (cyclic) or zigzag (bounce)
    #[arg(short, long)]
    pub method: Option<String>,

    /// Remove all whitespace before encrypting
    #[arg(long)]
    pub remove_space: bool,

    /// Remove everything except letters and numbers before encrypting
    #[arg(long)]
    pub remove_symbol: bool,

    /// Show the rail grid
    #[arg(short, long)]
    pub grid: bool,

    /// Replay the placement of each character step by step
    #[arg(long)]
    pub steps: bool,

    /// Pause between steps, in milliseconds
    #[arg(long, default_value = "0", requires = "steps")]
    pub delay_ms: u64,

    /// Print the result (cleaned text, matrix, trace) as JSON
    #[arg(long, conflicts_with = "steps")]
    pub json: bool,

    /// Export the rail layout as a text file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for EncryptCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config()?;
        let text = self.input.read("plaintext")?;

        let rails = self.rails.unwrap_or(config.rails);
        let method = resolve_method(self.method.as_deref(), &config)?;

        let mut clean_config = config.encrypt_config();
        clean_config.remove_space |= self.remove_space;
        clean_config.remove_symbol |= self.remove_symbol;

        let message = encrypt_with_config(&text, rails, method, &clean_config)?;

        if message.cleaned.is_empty() {
            warn!("nothing to encrypt after cleaning");
            return Ok(());
        }

        let result = &message.transposition;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&message)?);
        } else {
            println!("Cleaned: {}", message.cleaned);
            println!("Rails: {}  Method: {}", rails, method.label());
            println!();

            if self.steps {
                let mut playback = Playback::new(result);
                playback
                    .run(&mut io::stdout(), Duration::from_millis(self.delay_ms))
                    .context("Failed to write playback")?;
            } else if self.grid {
                for line in grid_lines(&result.matrix) {
                    println!("{}", line);
                }
                println!();
            }

            println!("{}", result.matrix.readout_line());
            println!("Ciphertext: {}", result.text);
        }

        if let Some(path) = &self.output {
            std::fs::write(path, export_text(Direction::Encrypt, &text, result))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Rail layout exported to {}", path.display());
        }

        Ok(())
    }
}
