//! Brute-force command - try every rail count and rank the results.

use anyhow::{bail, Result};
use clap::Args;

use railfence::lab::brute_force;
use railfence::RailRange;

use super::input::TextInput;
use super::{load_config, CommandExecutor};

/// Decrypt with every rail count in a range and rank the candidates by a
/// readability score (highest first).
///
/// The score is a heuristic: vowel ratio, repeated letters, common English
/// words, Japanese script and spacing.
#[derive(Args, Debug)]
pub struct BruteForceCommand {
    #[command(flatten)]
    pub input: TextInput,

    /// Rail range to try, as MIN-MAX (default from config, else 2-10)
    #[arg(long)]
    pub range: Option<String>,

    /// Only try the sequential method
    #[arg(long)]
    pub sequential_only: bool,

    /// Show only the best K candidates
    #[arg(long)]
    pub top: Option<usize>,

    /// Print the candidates as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for BruteForceCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config()?;
        let raw = self.input.read("ciphertext")?;
        let ciphertext = raw.trim();

        if ciphertext.is_empty() {
            bail!("Ciphertext cannot be empty");
        }

        let range: RailRange = match &self.range {
            Some(r) => r.parse()?,
            None => config.rail_range()?,
        };
        let both_methods = config.lab.both_methods && !self.sequential_only;

        let mut candidates = brute_force(ciphertext, range.min, range.max, both_methods);
        if let Some(k) = self.top {
            candidates.truncate(k);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
            return Ok(());
        }

        if candidates.is_empty() {
            println!("No decryption results.");
            return Ok(());
        }

        println!("Brute-force results for rails {} (best first):", range);
        println!();
        for (i, candidate) in candidates.iter().enumerate() {
            println!(
                "{:>3}. {} rails, {:<20} score {:>3} [{}]",
                i + 1,
                candidate.rails,
                candidate.method.label(),
                candidate.score,
                candidate.band().as_str()
            );
            println!("     {}", candidate.plaintext);
        }

        Ok(())
    }
}
