//! Rail matrix and placement trace.
//!
//! The matrix has one row per rail and one column per text position.
//! Encryption fills it in text order and reads it rail by rail; decryption
//! fills it rail by rail and reads it in text order.

use serde::Serialize;

use super::Method;

/// Separator between rails in the read-out line.
const READOUT_SEPARATOR: &str = " → ";

/// N rails × length columns grid; a cell holds the character placed there, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailMatrix {
    rails: usize,
    columns: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl RailMatrix {
    /// Creates an empty matrix.
    pub fn new(rails: usize, columns: usize) -> Self {
        Self {
            rails,
            columns,
            cells: vec![vec![None; columns]; rails],
        }
    }

    /// Number of rails (rows).
    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Number of columns (text positions).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the character at (`rail`, `column`), or `None` for an empty
    /// or out-of-range cell.
    pub fn get(&self, rail: usize, column: usize) -> Option<char> {
        self.cells.get(rail)?.get(column).copied().flatten()
    }

    /// Builds a matrix from placements, e.g. a prefix of a trace for
    /// step-by-step display. Placements outside the grid are ignored.
    pub fn from_trace(rails: usize, columns: usize, steps: &[TraceStep]) -> Self {
        let mut matrix = Self::new(rails, columns);
        for step in steps {
            if step.rail < rails && step.column < columns {
                matrix.place(step.rail, step.column, step.ch);
            }
        }
        matrix
    }

    pub(crate) fn place(&mut self, rail: usize, column: usize, ch: char) {
        self.cells[rail][column] = Some(ch);
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// All rows, top rail first.
    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.cells
    }

    /// Characters on `rail`, left to right, skipping empty cells.
    pub fn rail_chars(&self, rail: usize) -> impl Iterator<Item = char> + '_ {
        self.cells
            .get(rail)
            .into_iter()
            .flat_map(|row| row.iter().flatten().copied())
    }

    /// Reads the matrix rail by rail (the encryption read-out order).
    pub fn read_by_rails(&self) -> String {
        (0..self.rails).flat_map(|r| self.rail_chars(r)).collect()
    }

    /// Reads the matrix column by column (the decryption read-out order).
    pub fn read_by_columns(&self) -> String {
        (0..self.columns)
            .filter_map(|c| (0..self.rails).find_map(|r| self.get(r, c)))
            .collect()
    }

    /// Formats the per-rail read-out, e.g. `Rail1: Hl r! → Rail2: eowl`.
    ///
    /// Empty rails are omitted.
    pub fn readout_line(&self) -> String {
        (0..self.rails)
            .filter_map(|r| {
                let chars: String = self.rail_chars(r).collect();
                if chars.is_empty() {
                    None
                } else {
                    Some(format!("Rail{}: {}", r + 1, chars))
                }
            })
            .collect::<Vec<_>>()
            .join(READOUT_SEPARATOR)
    }
}

/// One character placement: which cell a character was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// Rail index (0-based).
    pub rail: usize,
    /// Column index, equal to the position in the plaintext.
    pub column: usize,
    /// The placed character.
    #[serde(rename = "char")]
    pub ch: char,
}

/// Result of an encryption or decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transposition {
    /// Ciphertext for encryption, plaintext for decryption.
    pub text: String,
    /// Rail count used.
    pub rails: usize,
    /// Method used.
    pub method: Method,
    /// The filled rail matrix.
    pub matrix: RailMatrix,
    /// Placements in column order.
    pub trace: Vec<TraceStep>,
}

impl Transposition {
    /// True when the input was empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters in the result.
    pub fn len(&self) -> usize {
        self.trace.len()
    }
}
