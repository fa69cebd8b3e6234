//! Per-filename parse state.

use super::{CanonicalTag, TagType};

/// Which family of bracket a token was captured from.
///
/// Braces and angle brackets share parenthesis semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketType {
    /// `()`, `{}` or `<>`: region, language, version, development status.
    Paren,
    /// `[]`: dump status, hacks, translations.
    Square,
}

/// A token captured by bracket extraction, before mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub value: String,
    pub bracket_type: BracketType,
    /// Index within the sequence of tokens of the same bracket type.
    pub position: usize,
}

impl RawTag {
    pub fn new(value: impl Into<String>, bracket_type: BracketType, position: usize) -> Self {
        Self {
            value: value.into(),
            bracket_type,
            position,
        }
    }
}

/// State threaded through disambiguation of one filename.
///
/// Created once per filename and only ever appended to. Not shared between
/// filenames or threads.
#[derive(Debug, Clone)]
pub struct ParseContext {
    pub current: RawTag,
    resolved: Vec<CanonicalTag>,
}

impl ParseContext {
    /// Start a context seeded with tags already produced for this filename.
    pub fn new(resolved: Vec<CanonicalTag>) -> Self {
        Self {
            current: RawTag::new("", BracketType::Paren, 0),
            resolved,
        }
    }

    /// Point the context at the next token.
    pub fn advance(&mut self, raw: RawTag) {
        self.current = raw;
    }

    /// Record tags resolved for the current token.
    pub fn extend(&mut self, tags: impl IntoIterator<Item = CanonicalTag>) {
        self.resolved.extend(tags);
    }

    /// Tags resolved so far, in insertion order.
    pub fn resolved(&self) -> &[CanonicalTag] {
        &self.resolved
    }

    pub fn has_type(&self, tag_type: TagType) -> bool {
        self.resolved.iter().any(|t| t.tag_type == tag_type)
    }

    pub fn has_tag(&self, tag_type: TagType, value: &str) -> bool {
        self.resolved.iter().any(|t| t.is(tag_type, value))
    }

    /// Consume the context, yielding every resolved tag.
    pub fn into_tags(self) -> Vec<CanonicalTag> {
        self.resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_accumulates_in_order() {
        let mut ctx = ParseContext::new(vec![CanonicalTag::new(TagType::Year, "1994")]);
        ctx.advance(RawTag::new("USA", BracketType::Paren, 0));
        ctx.extend([
            CanonicalTag::new(TagType::Region, "us"),
            CanonicalTag::new(TagType::Lang, "en"),
        ]);

        assert!(ctx.has_type(TagType::Region));
        assert!(ctx.has_tag(TagType::Lang, "en"));
        assert!(!ctx.has_type(TagType::Dump));
        let rendered: Vec<String> = ctx.into_tags().iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, ["year:1994", "region:us", "lang:en"]);
    }
}
