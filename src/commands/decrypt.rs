//! Decrypt command - rebuild plaintext from ciphertext and rail parameters.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use railfence::{clean_text, decrypt, export_text, grid_lines, Direction};

use super::input::TextInput;
use super::playback::Playback;
use super::{load_config, resolve_method, CommandExecutor};

/// Decrypt rail-fence ciphertext.
///
/// NOTE: a wrong rail count or method is not detected - the output is then
/// a scrambled version of the ciphertext, not an error.
#[derive(Args, Debug)]
pub struct DecryptCommand {
    #[command(flatten)]
    pub input: TextInput,

    /// Number of rails used for encryption
    #[arg(short, long)]
    pub rails: Option<usize>,

    /// Method used for encryption: sequential or zigzag
    #[arg(short, long)]
    pub method: Option<String>,

    /// Show the rail grid
    #[arg(short, long)]
    pub grid: bool,

    /// Replay the reconstruction step by step
    #[arg(long)]
    pub steps: bool,

    /// Pause between steps, in milliseconds
    #[arg(long, default_value = "0", requires = "steps")]
    pub delay_ms: u64,

    /// Print the result (plaintext, matrix, trace) as JSON
    #[arg(long, conflicts_with = "steps")]
    pub json: bool,

    /// Export the rail layout as a text file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecryptCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config()?;
        let ciphertext = clean_text(&self.input.read("ciphertext")?, false, false);

        let rails = self.rails.unwrap_or(config.rails);
        let method = resolve_method(self.method.as_deref(), &config)?;

        let result = decrypt(&ciphertext, rails, method)?;

        if result.is_empty() {
            warn!("nothing to decrypt");
            return Ok(());
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("Rails: {}  Method: {}", rails, method.label());
            println!();

            if self.steps {
                let mut playback = Playback::new(&result);
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
            println!("Plaintext: {}", result.text);
        }

        if let Some(path) = &self.output {
            std::fs::write(path, export_text(Direction::Decrypt, &ciphertext, &result))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Rail layout exported to {}", path.display());
        }

        Ok(())
    }
}
