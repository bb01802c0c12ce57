//! Character counter.

use serde::Serialize;

/// Size of a text by several measures.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct CharacterCount {
    /// Unicode scalar values.
    pub characters: usize,
    /// UTF-16 code units, the length JavaScript reports.
    pub utf16_units: usize,
    pub bytes: usize,
    pub words: usize,
    pub lines: usize,
}

pub fn count(text: &str) -> CharacterCount {
    CharacterCount {
        characters: text.chars().count(),
        utf16_units: text.encode_utf16().count(),
        bytes: text.len(),
        words: text.split_whitespace().count(),
        lines: if text.is_empty() {
            0
        } else {
            text.matches('\n').count() + 1
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(count(""), CharacterCount::default());
    }

    #[test]
    fn test_ascii() {
        let c = count("hello world\nsecond line");
        assert_eq!(c.characters, 23);
        assert_eq!(c.utf16_units, 23);
        assert_eq!(c.bytes, 23);
        assert_eq!(c.words, 4);
        assert_eq!(c.lines, 2);
    }

    #[test]
    fn test_astral_characters() {
        let c = count("héllo 👋");
        assert_eq!(c.characters, 7);
        assert_eq!(c.utf16_units, 8);
        assert_eq!(c.bytes, 11);
        assert_eq!(c.words, 2);
        assert_eq!(c.lines, 1);
    }

    #[test]
    fn test_trailing_newline_starts_a_line() {
        assert_eq!(count("a\n").lines, 2);
    }
}
