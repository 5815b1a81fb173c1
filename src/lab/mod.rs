//! Cryptanalysis lab: brute-force decryption and transposition statistics.
//!
//! This module provides:
//! - Readability scoring of candidate plaintexts
//! - Brute-force decryption over rail ranges and methods
//! - Movement and entropy statistics over a fixed configuration sweep

pub mod brute_force;
pub mod readability;
pub mod statistics;

pub use brute_force::{brute_force, brute_force_methods, Candidate, RailRange};
pub use readability::{readability_score, ScoreBand, COMMON_WORDS};
pub use statistics::{
    analyze, character_frequency, movements, shannon_entropy, statistics, ConfigStatistics,
    StatisticsReport, STATISTICS_RAILS,
};
