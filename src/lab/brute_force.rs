//! Brute-force decryption across rail counts and methods.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::readability::{readability_score, ScoreBand};
use crate::cipher::{Method, MAX_RAILS};
use crate::decoder::decrypt;
use crate::error::RailFenceError;

/// Inclusive range of rail counts to try, written `MIN-MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailRange {
    pub min: usize,
    pub max: usize,
}

impl RailRange {
    /// Creates a range, rejecting `min` of 0, `min > max` or `max` above
    /// [`MAX_RAILS`].
    pub fn new(min: usize, max: usize) -> Result<Self, RailFenceError> {
        if min < 1 || min > max || max > MAX_RAILS {
            return Err(RailFenceError::InvalidRange(format!("{}-{}", min, max)));
        }
        Ok(Self { min, max })
    }

    pub fn iter(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

impl Default for RailRange {
    fn default() -> Self {
        Self { min: 2, max: 10 }
    }
}

impl fmt::Display for RailRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for RailRange {
    type Err = RailFenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RailFenceError::InvalidRange(s.to_string());

        let (min, max) = s.trim().split_once('-').ok_or_else(invalid)?;
        let min: usize = min.trim().parse().map_err(|_| invalid())?;
        let max: usize = max.trim().parse().map_err(|_| invalid())?;

        RailRange::new(min, max).map_err(|_| invalid())
    }
}

/// One brute-force decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub rails: usize,
    pub method: Method,
    pub plaintext: String,
    pub score: u32,
}

impl Candidate {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Decrypts `ciphertext` with every rail count in `min_rails..=max_rails`
/// and ranks the candidates by readability, best first.
///
/// Only the sequential method is tried unless `both_methods` is set.
/// Equal scores keep sweep order: rail count ascending, sequential before
/// zigzag.
pub fn brute_force(
    ciphertext: &str,
    min_rails: usize,
    max_rails: usize,
    both_methods: bool,
) -> Vec<Candidate> {
    let methods: &[Method] = if both_methods {
        &Method::ALL
    } else {
        &[Method::Sequential]
    };
    brute_force_methods(ciphertext, min_rails..=max_rails, methods)
}

/// Like [`brute_force`], with an explicit method list.
///
/// Configurations the engine rejects (a rail count of 0) are skipped. Rail
/// counts above [`MAX_RAILS`] are never tried.
pub fn brute_force_methods(
    ciphertext: &str,
    rails: RangeInclusive<usize>,
    methods: &[Method],
) -> Vec<Candidate> {
    let (first, last) = rails.into_inner();
    if last > MAX_RAILS {
        warn!(max = last, limit = MAX_RAILS, "capping rail range");
    }

    let mut candidates = Vec::new();

    for rail_count in first..=last.min(MAX_RAILS) {
        for &method in methods {
            match decrypt(ciphertext, rail_count, method) {
                Ok(result) => {
                    let score = readability_score(&result.text);
                    candidates.push(Candidate {
                        rails: rail_count,
                        method,
                        plaintext: result.text,
                        score,
                    });
                }
                Err(e) => {
                    warn!(rails = rail_count, %method, error = %e, "skipping configuration");
                }
            }
        }
    }

    // Stable: ties keep sweep order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(count = candidates.len(), "brute force finished");
    candidates
}
