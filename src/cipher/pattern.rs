//! Rail assignment: which rail each text position is written to.
//!
//! The pattern depends only on the text length, the rail count and the
//! method, never on the characters themselves. Encryption and decryption
//! therefore compute the same pattern for texts of equal length.

use super::{validate_rails, Method};
use crate::error::RailFenceError;

/// Infinite walk over rail indices for a given rail count and method.
///
/// With a single rail every position lands on rail 0, whatever the method.
#[derive(Debug, Clone)]
pub struct RailWalk {
    rails: usize,
    method: Method,
    current: usize,
    descending: bool,
}

impl RailWalk {
    /// Starts a walk at rail 0.
    pub fn new(rails: usize, method: Method) -> Result<Self, RailFenceError> {
        validate_rails(rails)?;
        Ok(Self {
            rails,
            method,
            current: 0,
            descending: false,
        })
    }

    fn advance(&mut self) {
        if self.rails == 1 {
            return;
        }

        match self.method {
            Method::Sequential => {
                self.current = (self.current + 1) % self.rails;
            }
            Method::Zigzag => {
                if self.current == 0 {
                    self.descending = false;
                } else if self.current == self.rails - 1 {
                    self.descending = true;
                }

                if self.descending {
                    self.current -= 1;
                } else {
                    self.current += 1;
                }
            }
        }
    }
}

impl Iterator for RailWalk {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let rail = self.current;
        self.advance();
        Some(rail)
    }
}

/// Computes the rail index for every position of a text of `length` characters.
///
/// # Errors
/// Returns [`RailFenceError::InvalidRailCount`] when `rails` is 0 or above
/// [`MAX_RAILS`](crate::cipher::MAX_RAILS).
pub fn rail_assignment(
    length: usize,
    rails: usize,
    method: Method,
) -> Result<Vec<usize>, RailFenceError> {
    Ok(RailWalk::new(rails, method)?.take(length).collect())
}

/// Counts how many positions of `pattern` land on each of the `rails` rails.
///
/// Entries outside `0..rails` are ignored.
pub fn rail_lengths(pattern: &[usize], rails: usize) -> Vec<usize> {
    let mut lengths = vec![0; rails];
    for &rail in pattern {
        if let Some(len) = lengths.get_mut(rail) {
            *len += 1;
        }
    }
    lengths
}
