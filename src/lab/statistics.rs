//! Character movement and entropy statistics across configurations.
//!
//! Movement is measured per character of the original text as the distance
//! to the first occurrence of that character in the ciphertext. Repeated
//! characters all measure against that first occurrence, so this is an
//! approximation of the real displacement, not exact permutation tracking.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::{info, warn};

use crate::cipher::Method;
use crate::encoder::encrypt;
use crate::text::strip_whitespace;

/// Rail counts covered by the statistics experiment.
pub const STATISTICS_RAILS: RangeInclusive<usize> = 2..=6;

/// Movement and entropy figures for one (rails, method) configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigStatistics {
    pub rails: usize,
    pub method: Method,
    pub ciphertext: String,
    pub original_entropy: f64,
    pub encrypted_entropy: f64,
    /// `encrypted_entropy - original_entropy`.
    pub entropy_delta: f64,
    pub avg_movement: f64,
    pub max_movement: usize,
}

/// Statistics for every configuration, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub entries: Vec<ConfigStatistics>,
}

impl StatisticsReport {
    /// The configuration with the highest average movement.
    ///
    /// The first one in sweep order wins ties.
    pub fn most_dispersive(&self) -> Option<&ConfigStatistics> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(b) if b.avg_movement >= entry.avg_movement => Some(b),
            _ => Some(entry),
        })
    }
}

/// Counts occurrences of each character.
pub fn character_frequency(text: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Shannon entropy in bits, `-Σ p·log2 p` over the observed frequencies.
///
/// Returns 0 for an empty distribution.
pub fn shannon_entropy(freq: &BTreeMap<char, usize>) -> f64 {
    let total: usize = freq.values().sum();
    if total == 0 {
        return 0.0;
    }

    freq.values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

/// Distance of each original character to its first occurrence in `encrypted`.
///
/// Characters absent from `encrypted` (e.g. stripped whitespace) are skipped.
pub fn movements(original: &str, encrypted: &str) -> Vec<usize> {
    let encrypted: Vec<char> = encrypted.chars().collect();

    original
        .chars()
        .enumerate()
        .filter_map(|(i, c)| {
            encrypted
                .iter()
                .position(|&e| e == c)
                .map(|pos| i.abs_diff(pos))
        })
        .collect()
}

/// Builds the statistics for one configuration.
pub fn analyze(original: &str, encrypted: &str, rails: usize, method: Method) -> ConfigStatistics {
    let original_entropy = shannon_entropy(&character_frequency(original));
    let encrypted_entropy = shannon_entropy(&character_frequency(encrypted));

    let moved = movements(original, encrypted);
    let (avg_movement, max_movement) = if moved.is_empty() {
        (0.0, 0)
    } else {
        let sum: usize = moved.iter().sum();
        (
            sum as f64 / moved.len() as f64,
            moved.iter().copied().max().unwrap_or(0),
        )
    };

    ConfigStatistics {
        rails,
        method,
        ciphertext: encrypted.to_string(),
        original_entropy,
        encrypted_entropy,
        entropy_delta: encrypted_entropy - original_entropy,
        avg_movement,
        max_movement,
    }
}

/// Encrypts `plaintext` under rails 2..=6 with both methods and measures
/// each configuration.
///
/// Leading and trailing whitespace is trimmed. Encryption uses the text with
/// line breaks and all whitespace removed; the analysis compares against the
/// trimmed text itself.
pub fn statistics(plaintext: &str) -> StatisticsReport {
    let original = plaintext.trim();
    let cleaned = strip_whitespace(original);

    let mut entries = Vec::new();
    for rails in STATISTICS_RAILS {
        for method in Method::ALL {
            match encrypt(&cleaned, rails, method) {
                Ok(result) => entries.push(analyze(original, &result.text, rails, method)),
                Err(e) => {
                    warn!(rails, %method, error = %e, "skipping configuration");
                }
            }
        }
    }

    let report = StatisticsReport { entries };
    if let Some(best) = report.most_dispersive() {
        info!(
            rails = best.rails,
            method = %best.method,
            avg_movement = best.avg_movement,
            "most dispersive configuration"
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_frequency() {
        let freq = character_frequency("abca");
        assert_eq!(freq.get(&'a'), Some(&2));
        assert_eq!(freq.get(&'b'), Some(&1));
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn test_entropy_uniform() {
        assert!(approx(shannon_entropy(&character_frequency("abcd")), 2.0));
        assert!(approx(shannon_entropy(&character_frequency("aaaa")), 0.0));
        assert!(approx(shannon_entropy(&character_frequency("")), 0.0));
    }

    #[test]
    fn test_entropy_bounds() {
        for text in ["Hello, world!", "aab", "アスゴゴロクジニ", "x"] {
            let freq = character_frequency(text);
            let h = shannon_entropy(&freq);
            assert!(h >= 0.0);
            assert!(h <= (freq.len() as f64).log2() + 1e-9);
        }
    }

    #[test]
    fn test_movements_first_occurrence() {
        // 'a' at 0 and 2 both measure against position 1 in "bac"
        assert_eq!(movements("aba", "bac"), vec![1, 1, 1]);
    }

    #[test]
    fn test_movements_skip_missing_chars() {
        assert_eq!(movements("a b", "ab"), vec![0, 1]);
    }

    #[test]
    fn test_analyze_permutation_keeps_entropy() {
        let stats = analyze("abcdef", "acebdf", 2, Method::Sequential);
        assert!(approx(stats.entropy_delta, 0.0));
        // moves: a0 b2 c1 d1 e2 f0
        assert_eq!(stats.max_movement, 2);
        assert!(approx(stats.avg_movement, 1.0));
    }

    #[test]
    fn test_statistics_covers_ten_configurations() {
        let report = statistics("Hello, world!");
        assert_eq!(report.entries.len(), 10);

        let order: Vec<(usize, Method)> =
            report.entries.iter().map(|e| (e.rails, e.method)).collect();
        assert_eq!(order[0], (2, Method::Sequential));
        assert_eq!(order[1], (2, Method::Zigzag));
        assert_eq!(order[9], (6, Method::Zigzag));
    }

    #[test]
    fn test_sweep_rails_within_engine_limits() {
        // Every swept configuration must encrypt, or the report loses an entry.
        assert!(*STATISTICS_RAILS.start() >= 1);
        assert!(*STATISTICS_RAILS.end() <= crate::cipher::MAX_RAILS);
        for rails in STATISTICS_RAILS {
            for method in Method::ALL {
                assert!(encrypt("abc", rails, method).is_ok());
            }
        }
    }

    #[test]
    fn test_statistics_strips_whitespace_before_encrypting() {
        let report = statistics("Hello, world!");
        for entry in &report.entries {
            assert_eq!(entry.ciphertext.chars().count(), 12);
            assert!(!entry.ciphertext.contains(' '));
        }
    }

    #[test]
    fn test_two_rails_are_identical_for_both_methods() {
        let report = statistics("rail fence cipher");
        assert_eq!(report.entries[0].ciphertext, report.entries[1].ciphertext);
    }

    #[test]
    fn test_most_dispersive_first_wins_ties() {
        let report = statistics("aaaa");
        let best = report.most_dispersive().unwrap();
        assert_eq!((best.rails, best.method), (2, Method::Sequential));
    }

    #[test]
    fn test_empty_plaintext() {
        let report = statistics("   ");
        assert_eq!(report.entries.len(), 10);
        assert!(report.entries.iter().all(|e| e.ciphertext.is_empty()));
        assert!(report.entries.iter().all(|e| e.avg_movement == 0.0));
    }
}
