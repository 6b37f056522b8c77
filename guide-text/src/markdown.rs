//! Minimal Markdown paragraph segmenter.
//!
//! Understands exactly two block constructs: `#` headers and blank-line
//! separated text paragraphs.  Soft-wrapped source lines are re-flowed
//! into one paragraph; a trailing backslash joins a source line to the
//! next one without a separator.

use serde::Serialize;

const HEADER_CHAR: char = '#';
const CONTINUATION_CHAR: char = '\\';

/// A run of inline content inside a paragraph.
///
/// Only plain text exists today; styled spans and inline images are
/// expected to become further variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum InlineElement {
    Text(String),
}

impl InlineElement {
    pub fn text(&self) -> &str {
        match self {
            InlineElement::Text(content) => content,
        }
    }
}

/// One block of parsed page text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Paragraph {
    Header {
        elements: Vec<InlineElement>,
        level: usize,
    },
    Regular {
        elements: Vec<InlineElement>,
    },
}

impl Paragraph {
    pub fn elements(&self) -> &[InlineElement] {
        match self {
            Paragraph::Header { elements, .. } | Paragraph::Regular { elements } => elements,
        }
    }

    /// Header level, `None` for regular text.
    pub fn header_level(&self) -> Option<usize> {
        match self {
            Paragraph::Header { level, .. } => Some(*level),
            Paragraph::Regular { .. } => None,
        }
    }

    /// Words of the paragraph joined by single spaces.
    pub fn plain_text(&self) -> String {
        self.elements()
            .iter()
            .map(InlineElement::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split a line on single spaces into text elements, dropping blanks.
pub fn split_to_inline_elements(line: &str) -> Vec<InlineElement> {
    line.split(' ')
        .filter(|token| !token.trim().is_empty())
        .map(|token| InlineElement::Text(token.to_owned()))
        .collect()
}

/// Join source lines ending in a backslash with their successor.
///
/// A continuation on the last line of the input is kept as a line of its
/// own rather than dropped.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = String::new();
    for line in text.split('\n') {
        match line.strip_suffix(CONTINUATION_CHAR) {
            Some(head) => pending.push_str(head),
            None => {
                pending.push_str(line);
                lines.push(std::mem::take(&mut pending));
            }
        }
    }
    if !pending.is_empty() {
        lines.push(pending);
    }
    lines
}

/// Accumulates soft-wrapped lines of the current text paragraph.
struct TextBuffer<'a> {
    text: String,
    out: &'a mut Vec<Paragraph>,
}

impl TextBuffer<'_> {
    fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(line.trim_end());
    }

    /// Emit the buffered text as a paragraph unless it is blank.
    fn flush(&mut self) {
        if !self.text.trim().is_empty() {
            self.out.push(Paragraph::Regular {
                elements: split_to_inline_elements(&self.text),
            });
        }
        self.text.clear();
    }
}

/// Convert raw page source into an ordered list of paragraphs.
pub fn parse_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut buffer = TextBuffer {
        text: String::new(),
        out: &mut paragraphs,
    };

    for dirty in logical_lines(text) {
        let line = dirty.trim_start();
        if line.is_empty() {
            buffer.flush();
        } else if line.starts_with(HEADER_CHAR) {
            buffer.flush();
            let marker = line.len() - line.trim_start_matches(HEADER_CHAR).len();
            buffer.out.push(Paragraph::Header {
                elements: split_to_inline_elements(&line[marker..]),
                level: marker,
            });
        } else {
            buffer.push_line(line);
        }
    }
    buffer.flush();

    paragraphs
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(words: &[&str]) -> Vec<InlineElement> {
        words.iter().map(|w| InlineElement::Text(w.to_string())).collect()
    }

    #[test]
    fn test_header_then_soft_wrapped_paragraph() {
        let parsed = parse_paragraphs("# Title\n\nHello\nworld");
        assert_eq!(
            parsed,
            vec![
                Paragraph::Header { elements: text(&["Title"]), level: 1 },
                Paragraph::Regular { elements: text(&["Hello", "world"]) },
            ]
        );
    }

    #[test]
    fn test_backslash_continuation_joins_without_space() {
        let parsed = parse_paragraphs("foo\\\nbar");
        assert_eq!(parsed, vec![Paragraph::Regular { elements: text(&["foobar"]) }]);
    }

    #[test]
    fn test_consecutive_headers_stay_separate() {
        let parsed = parse_paragraphs("## A\n## B");
        assert_eq!(
            parsed,
            vec![
                Paragraph::Header { elements: text(&["A"]), level: 2 },
                Paragraph::Header { elements: text(&["B"]), level: 2 },
            ]
        );
    }

    #[test]
    fn test_header_flushes_pending_text() {
        let parsed = parse_paragraphs("intro text\n### Section\nbody");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].plain_text(), "intro text");
        assert_eq!(parsed[1].header_level(), Some(3));
        assert_eq!(parsed[1].plain_text(), "Section");
        assert_eq!(parsed[2].plain_text(), "body");
    }

    #[test]
    fn test_blank_lines_drop_empty_paragraphs() {
        let parsed = parse_paragraphs("\n\n   \nword\n\n\n");
        assert_eq!(parsed, vec![Paragraph::Regular { elements: text(&["word"]) }]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_paragraphs("").is_empty());
    }

    #[test]
    fn test_leading_whitespace_trimmed_before_header_check() {
        let parsed = parse_paragraphs("   # Indented");
        assert_eq!(parsed, vec![Paragraph::Header { elements: text(&["Indented"]), level: 1 }]);
    }

    #[test]
    fn test_header_without_space() {
        let parsed = parse_paragraphs("##Tight");
        assert_eq!(parsed, vec![Paragraph::Header { elements: text(&["Tight"]), level: 2 }]);
    }

    #[test]
    fn test_empty_header_kept() {
        let parsed = parse_paragraphs("#");
        assert_eq!(parsed, vec![Paragraph::Header { elements: vec![], level: 1 }]);
    }

    #[test]
    fn test_trailing_whitespace_collapsed() {
        let parsed = parse_paragraphs("one   \n   two  ");
        assert_eq!(parsed, vec![Paragraph::Regular { elements: text(&["one", "two"]) }]);
    }

    #[test]
    fn test_inner_spaces_dropped() {
        assert_eq!(split_to_inline_elements("a  b   c "), text(&["a", "b", "c"]));
    }

    #[test]
    fn test_continuation_into_header_line() {
        // The joined logical line starts with '#', so it is a header.
        let parsed = parse_paragraphs("#\\\n# Joined");
        assert_eq!(parsed, vec![Paragraph::Header { elements: text(&["Joined"]), level: 2 }]);
    }

    #[test]
    fn test_continuation_on_last_line_is_kept() {
        let parsed = parse_paragraphs("first\n\nlast\\");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].plain_text(), "last");
    }

    #[test]
    fn test_whitespace_only_line_breaks_paragraph() {
        let parsed = parse_paragraphs("a\n \t \nb");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_hash_inside_text_is_literal() {
        let parsed = parse_paragraphs("issue #42 fixed");
        assert_eq!(parsed, vec![Paragraph::Regular { elements: text(&["issue", "#42", "fixed"]) }]);
    }
}
