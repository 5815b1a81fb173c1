//! railfence - Rail-fence cipher with a brute-force and statistics lab
//!
//! Encrypts and decrypts with the sequential or zigzag rail pattern, shows
//! the rail grid, and analyzes how well each configuration hides a message.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    BruteForceCommand, CommandExecutor, ConfigCommand, DecryptCommand, EncryptCommand,
    StatsCommand,
};

/// railfence - Rail-fence cipher lab
///
/// Characters are distributed across N rails (cyclically or in a zigzag)
/// and read back rail by rail. Decryption rebuilds the same grid.
#[derive(Parser)]
#[command(name = "railfence")]
#[command(version)]
#[command(about = "Rail-fence cipher with grid view, brute force and statistics")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message
    Encrypt(EncryptCommand),

    /// Decrypt a ciphertext
    Decrypt(DecryptCommand),

    /// Try every rail count and rank the candidates by readability
    #[command(name = "brute-force")]
    BruteForce(BruteForceCommand),

    /// Compare character movement and entropy across configurations
    Stats(StatsCommand),

    /// Manage ~/.railfence/config.toml
    Config(ConfigCommand),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "railfence=debug"
    } else {
        "railfence=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encrypt(cmd) => cmd.execute(),
        Commands::Decrypt(cmd) => cmd.execute(),
        Commands::BruteForce(cmd) => cmd.execute(),
        Commands::Stats(cmd) => cmd.execute(),
        Commands::Config(cmd) => cmd.execute(),
    }
}
