//! Error types for the rail-fence engine.

use thiserror::Error;

/// Errors produced by the transposition engine and its analyzers.
///
/// Every variant is an invalid caller parameter. Empty input and mismatched
/// decryption parameters are never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RailFenceError {
    /// Rail count below 1 or above [`MAX_RAILS`](crate::cipher::MAX_RAILS).
    #[error("Invalid rail count: {0} (must be between 1 and {max})", max = crate::cipher::MAX_RAILS)]
    InvalidRailCount(usize),

    /// Method name that is neither sequential nor zigzag.
    #[error("Unknown method '{0}' (expected 'sequential' or 'zigzag')")]
    UnknownMethod(String),

    /// Malformed rail range such as "5-2" or "a-b".
    #[error("Invalid rail range '{0}' (expected MIN-MAX with 1 <= MIN <= MAX <= {max})", max = crate::cipher::MAX_RAILS)]
    InvalidRange(String),
}
