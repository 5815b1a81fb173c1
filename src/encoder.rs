//! Encryption: text → rail matrix → ciphertext.
//!
//! 1. Compute the rail assignment for the text length
//! 2. Write character `i` into cell (`rail[i]`, `i`)
//! 3. Read the matrix rail by rail, left to right
//!
//! The ciphertext is a permutation of the input: same characters, same length.

use serde::Serialize;
use tracing::debug;

use crate::cipher::{rail_assignment, Method, RailMatrix, TraceStep, Transposition};
use crate::error::RailFenceError;
use crate::text::clean_text;

/// Normalization applied by [`encrypt_with_config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncryptConfig {
    /// Remove all whitespace before encrypting.
    pub remove_space: bool,
    /// Remove everything that is not a letter or number before encrypting.
    pub remove_symbol: bool,
}

/// Result of cleaning and encrypting raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedMessage {
    /// The text that was actually encrypted.
    pub cleaned: String,
    /// Ciphertext, matrix and placement trace.
    pub transposition: Transposition,
}

impl EncryptedMessage {
    /// The ciphertext.
    pub fn ciphertext(&self) -> &str {
        &self.transposition.text
    }
}

/// Encrypts already-cleaned text.
///
/// Empty input yields an empty ciphertext and a matrix with zero columns.
///
/// # Errors
/// Returns [`RailFenceError::InvalidRailCount`] when `rails` is 0 or above
/// [`MAX_RAILS`](crate::cipher::MAX_RAILS).
pub fn encrypt(cleaned: &str, rails: usize, method: Method) -> Result<Transposition, RailFenceError> {
    let chars: Vec<char> = cleaned.chars().collect();
    let pattern = rail_assignment(chars.len(), rails, method)?;

    let mut matrix = RailMatrix::new(rails, chars.len());
    let mut trace = Vec::with_capacity(chars.len());

    for (column, (&ch, &rail)) in chars.iter().zip(&pattern).enumerate() {
        matrix.place(rail, column, ch);
        trace.push(TraceStep { rail, column, ch });
    }

    let text = matrix.read_by_rails();

    debug!(rails, %method, length = chars.len(), "encrypted text");

    Ok(Transposition {
        text,
        rails,
        method,
        matrix,
        trace,
    })
}

/// Cleans raw input with `config`, then encrypts it.
pub fn encrypt_with_config(
    text: &str,
    rails: usize,
    method: Method,
    config: &EncryptConfig,
) -> Result<EncryptedMessage, RailFenceError> {
    let cleaned = clean_text(text, config.remove_space, config.remove_symbol);

    debug!(
        input = text.chars().count(),
        cleaned = cleaned.chars().count(),
        "normalized input"
    );

    let transposition = encrypt(&cleaned, rails, method)?;
    Ok(EncryptedMessage {
        cleaned,
        transposition,
    })
}
