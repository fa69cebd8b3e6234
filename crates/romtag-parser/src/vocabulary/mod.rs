//! Canonical mapping of filename tokens.
//!
//! The vocabulary is a single flat, compile-time table so that one token
//! can resolve to several tags at once (`usa` is both `region:us` and
//! `lang:en`). Lookups hand out freshly built tags; the table itself is
//! never exposed.

mod table;

use crate::model::{CanonicalTag, TagType};
use crate::normalize::normalize;
use std::collections::BTreeSet;

/// ISO 639-2 style three-letter codes used by translation groups.
static LANGUAGE_CODES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "eng" => "en",
    "ger" => "de",
    "fre" => "fr",
    "spa" => "es",
    "ita" => "it",
    "rus" => "ru",
    "por" => "pt",
    "dut" => "nl",
    "swe" => "sv",
    "nor" => "no",
    "fin" => "fi",
    "dan" => "da",
    "pol" => "pl",
    "cze" => "cs",
    "gre" => "el",
    "hun" => "hu",
    "tur" => "tr",
    "ara" => "ar",
    "heb" => "he",
    "jpn" => "ja",
    "kor" => "ko",
    "chi" => "zh",
    "bra" => "pt",
};

/// Tags emitted by parsing rules rather than by a vocabulary key.
const RULE_TAGS: &[table::Entry] = &[
    (TagType::Unlicensed, "translation"),
    (TagType::Unlicensed, "translation:old"),
    (TagType::Edition, "version"),
    (TagType::Edition, "edition"),
    (TagType::Dump, "translated"),
    (TagType::Dump, "hacked:intro"),
    (TagType::Lang, "tr"),
];

/// Look up the canonical tags for a filename token.
///
/// The token is tried as-is (trimmed, lowercased) and then in normalized
/// form, so `"!p"` and `"USA"` both resolve. Unknown tokens yield an empty
/// vector. Every call returns new values; callers may mutate the result
/// freely.
///
/// # Examples
///
/// ```
/// use romtag_parser::vocabulary::map_token;
///
/// let tags: Vec<String> = map_token("USA").iter().map(|t| t.to_string()).collect();
/// assert_eq!(tags, ["region:us", "lang:en"]);
/// assert!(map_token("not-a-token").is_empty());
/// ```
pub fn map_token(token: &str) -> Vec<CanonicalTag> {
    let key = token.trim().to_lowercase();
    let entries = table::TOKENS
        .get(key.as_str())
        .or_else(|| table::TOKENS.get(normalize(&key).as_str()));

    entries
        .map(|entries| {
            entries
                .iter()
                .map(|&(tag_type, value)| CanonicalTag::new(tag_type, value))
                .collect()
        })
        .unwrap_or_default()
}

/// Map a translation-group language code to its two-letter form.
///
/// Three-letter codes found in the table are converted; anything else is
/// returned lowercased.
pub fn language_code(code: &str) -> String {
    let lower = code.to_lowercase();
    match LANGUAGE_CODES.get(lower.as_str()) {
        Some(short) => (*short).to_string(),
        None => lower,
    }
}

/// Every distinct canonical tag this crate can emit from its vocabulary
/// and fixed rules, sorted by type then value.
///
/// Tags built from numbers in the filename (years, discs, issues) are
/// open-ended and not listed.
pub fn canonical_tags() -> Vec<CanonicalTag> {
    let unique: BTreeSet<(TagType, &'static str)> = table::TOKENS
        .values()
        .flat_map(|entries| entries.iter().copied())
        .chain(RULE_TAGS.iter().copied())
        .collect();

    unique
        .into_iter()
        .map(|(tag_type, value)| CanonicalTag::new(tag_type, value))
        .collect()
}
