//! # romtag-parser
//!
//! Canonical tags and display titles from retro-media filenames.
//!
//! Filenames following No-Intro, TOSEC and GoodTools conventions pack
//! region, language, revision, development status and dump status into
//! bracket groups. This crate turns them into a flat sequence of
//! `type:value` tags drawn from a closed vocabulary, and cleans the name
//! into a human-readable title.
//!
//! ## Quick Start
//!
//! ```
//! use romtag_parser::{extract_title, parse_filename};
//!
//! let tags = parse_filename("Super Mario Bros (USA)(En)[!].nes");
//! let rendered: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
//! assert!(rendered.contains(&"region:us".to_string()));
//! assert!(rendered.contains(&"dump:verified".to_string()));
//!
//! assert_eq!(extract_title("Super Mario Bros (USA)(En)[!].nes", false), "Super Mario Bros");
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use romtag_parser::Parser;
//! use romtag_parser::config::ParserConfig;
//!
//! let config = ParserConfig::builder()
//!     .strip_leading_numbers(true)
//!     .build();
//!
//! let parser = Parser::new(config);
//! assert_eq!(parser.title("01 - Intro.flac"), "Intro");
//! ```
//!
//! Every function here is total: any input, including invalid UTF-8 via the
//! `_bytes` variants, produces a (possibly empty) result.

pub mod config;
pub mod fragments;
pub mod keys;
pub mod lexer;
pub mod model;
pub mod numbering;
pub mod parser;
pub mod vocabulary;

mod normalize;

pub use config::ParserConfig;
pub use fragments::{path_fragments, PathFragments};
pub use model::{BracketType, CanonicalTag, ParseContext, ParseError, RawTag, TagSource, TagType};
pub use normalize::normalize;
pub use parser::title::extract_title;

/// Parse a filename into canonical tags using default settings.
///
/// Tags are returned in production order: special patterns first, then
/// parenthesis groups, then square-bracket groups. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use romtag_parser::parse_filename;
///
/// let tags: Vec<String> = parse_filename("Game (Ch)(De)[!].rom")
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(tags, ["region:ch", "region:de", "lang:de", "dump:verified"]);
/// ```
pub fn parse_filename(filename: &str) -> Vec<CanonicalTag> {
    parser::parse(filename)
}

/// [`parse_filename`], rendered as `type:value` strings.
pub fn parse_filename_to_strings(filename: &str) -> Vec<String> {
    parse_filename(filename)
        .iter()
        .map(CanonicalTag::to_string)
        .collect()
}

/// [`parse_filename`] over raw bytes. Invalid UTF-8 becomes U+FFFD.
pub fn parse_filename_bytes(filename: &[u8]) -> Vec<CanonicalTag> {
    parse_filename(&String::from_utf8_lossy(filename))
}

/// [`extract_title`] over raw bytes. Invalid UTF-8 becomes U+FFFD.
pub fn extract_title_bytes(filename: &[u8], strip_leading_numbers: bool) -> String {
    extract_title(&String::from_utf8_lossy(filename), strip_leading_numbers)
}

/// A configurable filename parser.
///
/// ```
/// use romtag_parser::Parser;
/// use romtag_parser::config::ParserConfig;
///
/// let parser = Parser::new(ParserConfig::builder().max_tags(1).build());
/// assert_eq!(parser.parse("Game (USA)[!].nes").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a filename into canonical tags.
    pub fn parse(&self, filename: &str) -> Vec<CanonicalTag> {
        parser::parse_with_config(filename, &self.config)
    }

    /// Extract the display title of a filename.
    pub fn title(&self, filename: &str) -> String {
        extract_title(filename, self.config.strip_leading_numbers)
    }

    /// Compute path fragments for a media path.
    pub fn fragments(&self, path: &str) -> PathFragments {
        path_fragments(path, &self.config)
    }
}
