//! Bracket group extraction.
//!
//! A single forward pass over the filename bytes splits bracket contents
//! into parenthesis-like groups (`()`, `{}`, `<>`) and square groups
//! (`[]`). Delimiters are ASCII, so every recorded offset falls on a char
//! boundary.

use crate::model::BracketType;
use std::ops::Range;

/// Byte span in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A non-empty bracket group found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketGroup {
    /// Span of the content between the delimiters.
    pub inner_span: Span,
    pub bracket_type: BracketType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InParen,
    InSquare,
    InBrace,
    InAngle,
}

impl State {
    fn closer(self) -> Option<(u8, BracketType)> {
        match self {
            State::Outside => None,
            State::InParen => Some((b')', BracketType::Paren)),
            State::InSquare => Some((b']', BracketType::Square)),
            State::InBrace => Some((b'}', BracketType::Paren)),
            State::InAngle => Some((b'>', BracketType::Paren)),
        }
    }
}

/// Find every non-empty bracket group, in input order.
///
/// Groups do not nest: once inside a group, only its own closer is
/// significant. Unmatched openers and stray closers are ignored.
pub fn find_bracket_groups(input: &str) -> Vec<BracketGroup> {
    let mut groups = Vec::new();
    let mut state = State::Outside;
    let mut start = 0;

    for (i, &byte) in input.as_bytes().iter().enumerate() {
        match state.closer() {
            None => {
                let next = match byte {
                    b'(' => State::InParen,
                    b'[' => State::InSquare,
                    b'{' => State::InBrace,
                    b'<' => State::InAngle,
                    _ => continue,
                };
                state = next;
                start = i + 1;
            }
            Some((closer, bracket_type)) if byte == closer => {
                let inner_span = Span::new(start, i);
                if !inner_span.is_empty() {
                    groups.push(BracketGroup {
                        inner_span,
                        bracket_type,
                    });
                }
                state = State::Outside;
            }
            Some(_) => {}
        }
    }

    groups
}

/// Bracket contents split by bracket family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTags<'a> {
    /// Contents of `()`, `{}` and `<>` groups.
    pub paren: Vec<&'a str>,
    /// Contents of `[]` groups.
    pub square: Vec<&'a str>,
}

/// Partition a filename's bracket groups into paren-like and square tokens.
///
/// # Examples
///
/// ```
/// use romtag_parser::lexer::extract_tags;
///
/// let tags = extract_tags("Game (USA){Beta}[!].zip");
/// assert_eq!(tags.paren, ["USA", "Beta"]);
/// assert_eq!(tags.square, ["!"]);
/// ```
pub fn extract_tags(input: &str) -> ExtractedTags<'_> {
    let mut tags = ExtractedTags::default();
    for group in find_bracket_groups(input) {
        let text = &input[group.inner_span.start..group.inner_span.end];
        match group.bracket_type {
            BracketType::Paren => tags.paren.push(text),
            BracketType::Square => tags.square.push(text),
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_groups() {
        let tags = extract_tags("Super Mario Bros (USA)(En)[!].nes");
        assert_eq!(tags.paren, ["USA", "En"]);
        assert_eq!(tags.square, ["!"]);
    }

    #[test]
    fn test_empty_groups_ignored() {
        let tags = extract_tags("Game ()(USA)[]En].zip");
        assert_eq!(tags.paren, ["USA"]);
        assert!(tags.square.is_empty());
    }

    #[test]
    fn test_braces_and_angles_are_paren_like() {
        let tags = extract_tags("Game {Europe} <Beta> [h]");
        assert_eq!(tags.paren, ["Europe", "Beta"]);
        assert_eq!(tags.square, ["h"]);
    }

    #[test]
    fn test_no_nesting() {
        let tags = extract_tags("[T+Chi(Big5)100_Kuyagi]");
        assert_eq!(tags.square, ["T+Chi(Big5)100_Kuyagi"]);
        assert!(tags.paren.is_empty());

        let nested = extract_tags("Game (((((((((())))))))))");
        assert_eq!(nested.paren, ["((((((((("]);
    }

    #[test]
    fn test_unbalanced_input() {
        let tags = extract_tags("Game [USA (En {Beta");
        assert!(tags.paren.is_empty());
        assert!(tags.square.is_empty());

        let stray = extract_tags(")] Game >} (USA)");
        assert_eq!(stray.paren, ["USA"]);
    }

    #[test]
    fn test_multibyte_content() {
        let tags = extract_tags("ドラゴンクエスト (日本)[改]");
        assert_eq!(tags.paren, ["日本"]);
        assert_eq!(tags.square, ["改"]);
    }

    #[test]
    fn test_spans() {
        let groups = find_bracket_groups("ab(cd)");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].inner_span, Span::from(3..5));
        assert_eq!(groups[0].inner_span.len(), 2);
    }
}
