//! Heuristic readability score for brute-force candidates.
//!
//! The score only ranks candidates against each other. A high score does
//! not mean a candidate is the real plaintext.

use serde::Serialize;

/// Common English words rewarded by the score.
pub const COMMON_WORDS: [&str; 10] = [
    "the", "and", "you", "that", "was", "for", "are", "with", "his", "they",
];

/// Characters counted as vowels (ASCII plus kana vowel syllables).
const VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U', 'あ', 'い', 'う', 'え', 'お', 'ア', 'イ',
    'ウ', 'エ', 'オ',
];

const VOWEL_RATIO_MIN: f64 = 0.2;
const VOWEL_RATIO_MAX: f64 = 0.6;
const WHITESPACE_RATIO_MAX: f64 = 0.3;

const VOWEL_BONUS: u32 = 30;
const REPEAT_BASE: u32 = 20;
const REPEAT_PENALTY: u32 = 2;
const WORD_BONUS: u32 = 10;
const JAPANESE_BONUS: u32 = 15;
const WHITESPACE_BONUS: u32 = 10;

/// Score at or above which a candidate is considered likely readable.
pub const HIGH_SCORE: u32 = 50;
/// Score at or above which a candidate is considered possibly readable.
pub const MEDIUM_SCORE: u32 = 30;

/// Coarse classification of a score, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_SCORE {
            ScoreBand::High
        } else if score >= MEDIUM_SCORE {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{3042}'..='\u{3093}'   // hiragana あ..ん
        | '\u{30A2}'..='\u{30F3}' // katakana ア..ン
        | '\u{4E00}'..='\u{9FAF}' // CJK ideographs
    )
}

/// Counts adjacent pairs of identical characters.
fn consecutive_repeats(chars: &[char]) -> u32 {
    chars.windows(2).filter(|w| w[0] == w[1]).count() as u32
}

/// Scores how plaintext-like `text` looks.
///
/// - +30 when vowels make up 20%–60% of the characters
/// - up to +20, minus 2 per adjacent repeated character
/// - +10 per common English word found (case-insensitive substring)
/// - +15 when any kana or kanji is present
/// - +10 when whitespace is present but below 30% of the characters
///
/// Whitespace is Unicode `White_Space`, as in [`char::is_whitespace`].
pub fn readability_score(text: &str) -> u32 {
    let chars: Vec<char> = text.chars().collect();
    let length = chars.len();
    let mut score = 0;

    if length > 0 {
        let vowels = chars.iter().filter(|c| VOWELS.contains(*c)).count();
        let ratio = vowels as f64 / length as f64;
        if (VOWEL_RATIO_MIN..=VOWEL_RATIO_MAX).contains(&ratio) {
            score += VOWEL_BONUS;
        }
    }

    score += REPEAT_BASE.saturating_sub(consecutive_repeats(&chars) * REPEAT_PENALTY);

    let lower = text.to_lowercase();
    for word in COMMON_WORDS {
        if lower.contains(word) {
            score += WORD_BONUS;
        }
    }

    if chars.iter().any(|&c| is_japanese(c)) {
        score += JAPANESE_BONUS;
    }

    let spaces = chars.iter().filter(|c| c.is_whitespace()).count();
    if spaces > 0 && (spaces as f64) < length as f64 * WHITESPACE_RATIO_MAX {
        score += WHITESPACE_BONUS;
    }

    score
}
