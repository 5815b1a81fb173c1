//! Decryption: ciphertext → rail matrix → plaintext.
//!
//! 1. Compute the rail assignment for the ciphertext length
//! 2. Count the characters each rail received during encryption
//! 3. Split the ciphertext into one contiguous run per rail
//! 4. Walk the positions in order, taking the next character from the run
//!    of the rail assigned to that position
//!
//! Decryption with a rail count or method that differs from the one used
//! for encryption is not detected: it produces a well-formed permutation of
//! the ciphertext, just not the original text.

use tracing::debug;

use crate::cipher::{rail_assignment, rail_lengths, Method, RailMatrix, TraceStep, Transposition};
use crate::error::RailFenceError;

/// Decrypts `ciphertext` laid out on `rails` rails with `method`.
///
/// Empty input yields an empty plaintext.
///
/// # Errors
/// Returns [`RailFenceError::InvalidRailCount`] when `rails` is 0 or above
/// [`MAX_RAILS`](crate::cipher::MAX_RAILS).
pub fn decrypt(ciphertext: &str, rails: usize, method: Method) -> Result<Transposition, RailFenceError> {
    let chars: Vec<char> = ciphertext.chars().collect();
    let pattern = rail_assignment(chars.len(), rails, method)?;
    let lengths = rail_lengths(&pattern, rails);

    debug!(rails, %method, ?lengths, "rail lengths");

    let mut runs = Vec::with_capacity(rails);
    let mut offset = 0;
    for &len in &lengths {
        runs.push(chars[offset..offset + len].iter());
        offset += len;
    }

    let mut matrix = RailMatrix::new(rails, chars.len());
    let mut trace = Vec::with_capacity(chars.len());

    for (column, &rail) in pattern.iter().enumerate() {
        if let Some(&ch) = runs[rail].next() {
            matrix.place(rail, column, ch);
            trace.push(TraceStep { rail, column, ch });
        }
    }

    let text = matrix.read_by_columns();

    Ok(Transposition {
        text,
        rails,
        method,
        matrix,
        trace,
    })
}
