//! Stats command - measure how far characters move under each configuration.

use anyhow::{bail, Result};
use clap::Args;

use railfence::statistics;

use super::input::TextInput;
use super::CommandExecutor;

/// Encrypt a plaintext with 2-6 rails and both methods, and report the
/// average and maximum character movement and the entropy change.
///
/// Whitespace is removed before encrypting. Movement is measured against
/// the first occurrence of each character in the ciphertext.
#[derive(Args, Debug)]
pub struct StatsCommand {
    #[command(flatten)]
    pub input: TextInput,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for StatsCommand {
    fn execute(&self) -> Result<()> {
        let plaintext = self.input.read("plaintext")?;
        if plaintext.trim().is_empty() {
            bail!("Plaintext cannot be empty");
        }

        let report = statistics(&plaintext);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("Statistics");
        println!();
        for entry in &report.entries {
            println!("{} rails, {}", entry.rails, entry.method.label());
            println!("  Ciphertext:       {}", entry.ciphertext);
            println!("  Average movement: {:.1}", entry.avg_movement);
            println!("  Maximum movement: {}", entry.max_movement);
            println!("  Entropy change:   {:.2}", entry.entropy_delta);
            println!();
        }

        if let Some(best) = report.most_dispersive() {
            println!("Summary");
            println!(
                "  Most dispersive configuration: {} rails, {}",
                best.rails,
                best.method.label()
            );
            println!("  Average movement: {:.1} characters", best.avg_movement);
            println!("  Larger movement hides the original character order better.");
        }

        Ok(())
    }
}
