//! Rail-fence transposition engine.
//!
//! This module provides:
//! - Lane-traversal methods (cyclic sequential, bouncing zigzag)
//! - Rail assignment per text position
//! - The rail matrix and per-character placement trace shared by
//!   encryption and decryption

pub mod matrix;
pub mod pattern;

pub use matrix::{RailMatrix, TraceStep, Transposition};
pub use pattern::{rail_assignment, rail_lengths, RailWalk};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RailFenceError;

/// Largest rail count accepted.
///
/// The matrix holds one row per rail, so this bounds its size for texts far
/// shorter than the rail count.
pub const MAX_RAILS: usize = 1000;

/// How characters are distributed across rails.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Cyclic: 0, 1, ..., N-1, 0, 1, ...
    #[default]
    Sequential,
    /// Bouncing: 0, 1, ..., N-1, N-2, ..., 1, 0, 1, ...
    Zigzag,
}

impl Method {
    /// Both methods, in sweep order.
    pub const ALL: [Method; 2] = [Method::Sequential, Method::Zigzag];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Sequential => "sequential",
            Method::Zigzag => "zigzag",
        }
    }

    /// Human-readable label used in reports and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Sequential => "sequential (cyclic)",
            Method::Zigzag => "zigzag (bounce)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RailFenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" | "1" => Ok(Method::Sequential),
            "zigzag" | "zz" | "2" => Ok(Method::Zigzag),
            _ => Err(RailFenceError::UnknownMethod(s.to_string())),
        }
    }
}

/// Rejects rail counts outside `1..=MAX_RAILS`.
pub(crate) fn validate_rails(rails: usize) -> Result<(), RailFenceError> {
    if !(1..=MAX_RAILS).contains(&rails) {
        return Err(RailFenceError::InvalidRailCount(rails));
    }
    Ok(())
}
