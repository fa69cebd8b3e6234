//! Data model types for canonical filename tags.
//!
//! [`CanonicalTag`] is the unit of output. [`RawTag`] and [`ParseContext`]
//! are transient values used while a single filename is being resolved.

mod context;
mod tag;

pub use context::{BracketType, ParseContext, RawTag};
pub use tag::{CanonicalTag, TagSource, TagType};

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
