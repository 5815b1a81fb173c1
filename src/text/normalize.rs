//! Input normalization applied before encryption.
//!
//! The passes always run in the same order: line breaks, then whitespace,
//! then symbols. Each pass only ever removes characters, so running the
//! whole pipeline twice yields the same text as running it once.

/// Returns true for characters treated as line breaks.
fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Returns true for characters kept by symbol removal (letters and numbers).
fn is_letter_or_number(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric()
}

/// Cleans raw input text for encryption.
///
/// Line breaks are always removed. With `remove_space`, every Unicode
/// whitespace character is removed too, including the full-width space
/// (U+3000). With `remove_symbol`, everything that is not a letter or a
/// number is removed, which drops whitespace regardless of `remove_space`.
///
/// The input is never modified; a new string is returned.
pub fn clean_text(text: &str, remove_space: bool, remove_symbol: bool) -> String {
    let mut cleaned: String = text.chars().filter(|&c| !is_line_break(c)).collect();

    if remove_space {
        cleaned.retain(|c| !c.is_whitespace());
    }

    if remove_symbol {
        cleaned.retain(is_letter_or_number);
    }

    cleaned
}

/// Fixed normalization used by the statistics experiment.
///
/// Removes line breaks and all whitespace. Symbols are kept.
pub fn strip_whitespace(text: &str) -> String {
    clean_text(text, true, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_always_removed() {
        assert_eq!(clean_text("ab\ncd\r\nef", false, false), "abcdef");
    }

    #[test]
    fn test_spaces_kept_by_default() {
        assert_eq!(clean_text("Hello, world!", false, false), "Hello, world!");
    }

    #[test]
    fn test_remove_space() {
        assert_eq!(clean_text("Hello, world!\tok", true, false), "Hello,world!ok");
    }

    #[test]
    fn test_remove_full_width_space() {
        let text = "アス\u{3000}ゴゴロクジニ\u{3000}ヨコハマ";
        assert_eq!(clean_text(text, true, false), "アスゴゴロクジニヨコハマ");
    }

    #[test]
    fn test_remove_symbol() {
        assert_eq!(clean_text("Hello, world!", false, true), "Helloworld");
    }

    #[test]
    fn test_remove_symbol_also_drops_whitespace() {
        assert_eq!(clean_text("a b\u{3000}c", false, true), "abc");
    }

    #[test]
    fn test_remove_symbol_keeps_numbers_and_scripts() {
        assert_eq!(clean_text("第3回、テスト#1", false, true), "第3回テスト1");
        assert_eq!(clean_text("¿Cómo?", false, true), "Cómo");
    }

    #[test]
    fn test_idempotent() {
        let text = "Hola, ¿qué tal?\n  アス　ゴゴ 42!";
        let once = clean_text(text, true, true);
        assert_eq!(clean_text(&once, true, true), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text("", true, true), "");
        assert_eq!(clean_text("\n\n", false, false), "");
    }

    #[test]
    fn test_strip_whitespace_keeps_symbols() {
        assert_eq!(strip_whitespace("Hello, world!\n"), "Hello,world!");
    }
}
