//! Character and line statistics over decoded text

use serde::Serialize;

/// Statistics computed over successfully decoded text.
///
/// `accented_chars` counts characters outside the ASCII range; a non-zero
/// count is the heuristic signal that re-encoding actually mattered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub total_chars: usize,
    pub lines: usize,
    pub accented_chars: usize,
}

impl TextStats {
    /// Compute statistics for a decoded buffer.
    ///
    /// Line count is line-feed occurrences plus one, or zero for empty input.
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        let mut total_chars = 0;
        let mut accented_chars = 0;
        let mut newlines = 0;
        for ch in text.chars() {
            total_chars += 1;
            if !ch.is_ascii() {
                accented_chars += 1;
            }
            if ch == '\n' {
                newlines += 1;
            }
        }
        Self {
            total_chars,
            lines: newlines + 1,
            accented_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(TextStats::of(""), TextStats::default());
    }

    #[test]
    fn counts_lines_and_accents() {
        let stats = TextStats::of("café\nau lait\n");
        assert_eq!(stats.total_chars, 13);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.accented_chars, 1);
    }

    #[test]
    fn single_line_without_trailing_newline() {
        let stats = TextStats::of("abc");
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.total_chars, 3);
        assert_eq!(stats.accented_chars, 0);
    }
}
