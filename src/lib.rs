//! # Railfence - Rail-fence transposition cipher
//!
//! Railfence writes the characters of a text onto N "rails" and reads them
//! back rail by rail. It exposes the full rail layout and a per-character
//! placement trace so that callers can show how the ciphertext is formed,
//! plus a small lab for breaking the cipher.
//!
//! ## Overview
//!
//! - **Normalization**: line breaks are always removed; whitespace and
//!   symbols optionally
//! - **Two methods**: sequential (0,1,2,0,1,2,...) and zigzag (0,1,2,1,0,...)
//! - **Symmetric**: `decrypt(encrypt(x))` returns `x` for any rail count
//! - **Never detects wrong parameters**: decrypting with the wrong rail count
//!   or method gives a well-formed but garbled text, not an error
//! - **Brute force**: tries every rail count in a range and ranks the
//!   candidates by a readability heuristic
//! - **Statistics**: character movement and entropy per configuration
//!
//! This is a teaching cipher. It provides no real secrecy.
//!
//! ## Example Usage
//!
//! ```rust
//! use railfence::{decrypt, encrypt, Method};
//!
//! let encrypted = encrypt("Hello, world!", 3, Method::Sequential).unwrap();
//! assert_eq!(encrypted.text, "Hl r!eowll,od");
//! println!("{}", encrypted.matrix.readout_line());
//!
//! let decrypted = decrypt(&encrypted.text, 3, Method::Sequential).unwrap();
//! assert_eq!(decrypted.text, "Hello, world!");
//! ```
//!
//! ## Modules
//!
//! - [`cipher`]: Methods, rail assignment, rail matrix and trace
//! - [`text`]: Input normalization
//! - [`encoder`]: Encryption
//! - [`decoder`]: Decryption
//! - [`lab`]: Brute force and statistics
//! - [`export`]: Plain-text rendering of rail layouts
//! - [`config`]: User defaults for the CLI

/// Default rail count.
pub const DEFAULT_RAILS: usize = 3;

pub mod cipher;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod export;
pub mod lab;
pub mod text;

// Re-export commonly used types at the crate root
pub use cipher::{
    rail_assignment, rail_lengths, Method, RailMatrix, TraceStep, Transposition, MAX_RAILS,
};
pub use config::{Config, ConfigError};
pub use decoder::decrypt;
pub use encoder::{encrypt, encrypt_with_config, EncryptConfig, EncryptedMessage};
pub use error::RailFenceError;
pub use export::{export_text, grid_lines, Direction};
pub use lab::{brute_force, statistics, Candidate, RailRange, StatisticsReport};
pub use text::clean_text;
