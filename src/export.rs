//! Plain-text rendering of a rail layout.
//!
//! Used by the CLI for on-screen grids and for `--output` exports.

use crate::cipher::{RailMatrix, Transposition};

/// Marker written for an empty cell.
const EMPTY_CELL: char = '-';

/// Which operation produced a layout; selects the export labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn title(&self) -> &'static str {
        match self {
            Direction::Encrypt => "Rail Fence Cipher - Rail Layout",
            Direction::Decrypt => "Rail Fence Cipher - Decryption Rail Layout",
        }
    }

    fn input_label(&self) -> &'static str {
        match self {
            Direction::Encrypt => "Plaintext",
            Direction::Decrypt => "Ciphertext",
        }
    }

    fn output_label(&self) -> &'static str {
        match self {
            Direction::Encrypt => "Ciphertext",
            Direction::Decrypt => "Plaintext",
        }
    }
}

/// One line per rail: `Rail 1: H - - l - - ...`.
pub fn grid_lines(matrix: &RailMatrix) -> Vec<String> {
    matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.unwrap_or(EMPTY_CELL).to_string())
                .collect();
            format!("Rail {}: {}", r + 1, cells.join(" "))
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Full text export of an encryption or decryption.
pub fn export_text(direction: Direction, input: &str, result: &Transposition) -> String {
    let mut out = String::new();

    out.push_str(direction.title());
    out.push('\n');
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");

    out.push_str(&format!("{}: {}\n", direction.input_label(), input));
    out.push_str(&format!("Rails: {}\n", result.rails));
    out.push_str(&format!("Method: {}\n\n", result.method.label()));

    for line in grid_lines(&result.matrix) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&result.matrix.readout_line());
    out.push('\n');
    out.push_str(&format!("{}: {}\n", direction.output_label(), result.text));

    out
}
