//! Text processing before encryption.
//!
//! This module provides:
//! - Line-break, whitespace and symbol removal
//! - The fixed whitespace stripping used by the statistics experiment

pub mod normalize;

pub use normalize::{clean_text, strip_whitespace};
