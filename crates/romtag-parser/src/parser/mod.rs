//! The filename tagging pipeline.
//!
//! Special patterns are pulled out of the raw filename first; the
//! remainder is split into bracket tokens, which are resolved one at a
//! time against everything resolved before them.

pub mod disambiguate;
pub mod special;
pub mod split;
pub mod title;

use crate::config::ParserConfig;
use crate::lexer::extract_tags;
use crate::model::{BracketType, CanonicalTag, ParseContext, RawTag};
use tracing::debug;

/// Parse a filename into canonical tags using default config.
pub fn parse(filename: &str) -> Vec<CanonicalTag> {
    parse_with_config(filename, &ParserConfig::default())
}

/// Parse a filename into canonical tags.
///
/// Tags come back in the order they were produced: special patterns, then
/// parenthesis tokens, then square-bracket tokens. At most
/// `config.max_tags` are returned.
pub fn parse_with_config(filename: &str, config: &ParserConfig) -> Vec<CanonicalTag> {
    let special = special::extract_special_patterns(filename);
    let brackets = extract_tags(&special.remainder);

    let mut ctx = ParseContext::new(special.tags);
    let groups = [
        (BracketType::Paren, &brackets.paren),
        (BracketType::Square, &brackets.square),
    ];
    for (bracket_type, tokens) in groups {
        // Blank groups like "( )" carry nothing to map; they yield no tag and
        // do not count toward positions.
        let tokens = tokens.iter().filter(|t| !t.trim().is_empty());
        for (position, token) in tokens.enumerate() {
            ctx.advance(RawTag::new(*token, bracket_type, position));
            let resolved = disambiguate::disambiguate(&ctx);
            ctx.extend(resolved);
        }
    }

    let mut tags = ctx.into_tags();
    if tags.len() > config.max_tags {
        debug!(filename, found = tags.len(), max = config.max_tags, "truncating tags");
        tags.truncate(config.max_tags);
    }

    debug!(filename, count = tags.len(), "parsed filename");
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(filename: &str) -> Vec<String> {
        parse(filename).iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_no_intro_name() {
        assert_eq!(
            tags("Super Mario Bros (USA)(En)[!].nes"),
            ["region:us", "lang:en", "lang:en", "dump:verified"]
        );
    }

    #[test]
    fn test_swiss_german_inference() {
        assert_eq!(
            tags("Game (Ch)(De)[!].rom"),
            ["region:ch", "region:de", "lang:de", "dump:verified"]
        );
        assert_eq!(
            tags("Game (De)(Ch).rom"),
            ["region:de", "lang:de", "region:ch"]
        );
    }

    #[test]
    fn test_chinese_without_german_context() {
        assert_eq!(tags("Game (Japan)(Ch).rom"), ["region:jp", "lang:ja", "lang:zh"]);
    }

    #[test]
    fn test_special_tags_come_first() {
        assert_eq!(
            tags("Final Fantasy VII (Disc 1 of 3)(USA)(En).bin"),
            ["media:disc", "disc:1", "disctotal:3", "region:us", "lang:en", "lang:en"]
        );
    }

    #[test]
    fn test_bracketless_translation() {
        assert_eq!(
            tags("Final Fantasy V T+Eng v1.1 (USA)[!].smc"),
            [
                "unlicensed:translation",
                "lang:en",
                "rev:1-1",
                "region:us",
                "lang:en",
                "dump:verified"
            ]
        );
    }

    #[test]
    fn test_positions_are_per_bracket_type() {
        // "Tr" is the first parenthesis token even though a square token precedes it
        assert_eq!(tags("Game [b](Tr).rom"), ["region:tr", "dump:bad"]);
    }

    #[test]
    fn test_whitespace_tokens_skipped() {
        assert_eq!(tags("Game ( )( Tr ).rom"), ["region:tr"]);
        // blanks do not push "Tr" past the region slots
        assert_eq!(tags("Game ( )( )( )(Tr).rom"), ["region:tr"]);
    }

    #[test]
    fn test_max_tags() {
        let config = ParserConfig::builder().max_tags(2).build();
        let found = parse_with_config("Game (USA)(En)[!].nes", &config);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_total_on_degenerate_input() {
        assert!(parse("").is_empty());
        assert!(parse("()[]{}<>").is_empty());
        assert!(parse("((((((((((").is_empty());
        assert!(parse("]]]))").is_empty());
    }
}
