//! Character, word, line, and paragraph counts for a text buffer.

/// Counts are Unicode-aware: `chars` counts scalar values, `bytes` counts
/// the UTF-8 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub chars: usize,
    pub chars_no_whitespace: usize,
    pub words: usize,
    pub lines: usize,
    pub paragraphs: usize,
    pub bytes: usize,
}

pub fn analyze(text: &str) -> TextStats {
    TextStats {
        chars: text.chars().count(),
        chars_no_whitespace: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: text.split_whitespace().count(),
        lines: if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        },
        paragraphs: count_paragraphs(text),
        bytes: text.len(),
    }
}

/// A paragraph is a maximal run of lines that are not blank (a line of
/// only whitespace counts as blank).
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            count += 1;
            in_paragraph = true;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(analyze(""), TextStats::default());
    }

    #[test]
    fn test_single_line() {
        let stats = analyze("hello brave new world");
        assert_eq!(stats.chars, 21);
        assert_eq!(stats.chars_no_whitespace, 18);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.bytes, 21);
    }

    #[test]
    fn test_lines_and_paragraphs() {
        let text = "first paragraph\nstill first\n\nsecond paragraph\n   \nthird";
        let stats = analyze(text);
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.paragraphs, 3);
        assert_eq!(stats.words, 7);
    }

    #[test]
    fn test_trailing_newline_counts_a_line() {
        assert_eq!(analyze("one line\n").lines, 2);
    }

    #[test]
    fn test_multibyte_text() {
        let stats = analyze("héllo wörld");
        assert_eq!(stats.chars, 11);
        assert_eq!(stats.bytes, 13);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_whitespace_only() {
        let stats = analyze("  \n\t\n  ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.chars_no_whitespace, 0);
    }
}
