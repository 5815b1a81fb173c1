//! Text input shared by the commands: argument, file, or stdin.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug)]
pub struct TextInput {
    /// Input text (reads --file or stdin when omitted)
    pub text: Option<String>,

    /// Read the input text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl TextInput {
    /// Returns the raw input; `what` names it in prompts and errors.
    pub fn read(&self, what: &str) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {} from {}", what, path.display()));
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Reading {} from stdin (Ctrl+D to finish):", what);
        }

        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .with_context(|| format!("Failed to read {} from stdin", what))?;

        // Drop the trailing newline a pipe or terminal adds
        let trimmed_len = buffer.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        buffer.truncate(trimmed_len);
        Ok(buffer)
    }
}
