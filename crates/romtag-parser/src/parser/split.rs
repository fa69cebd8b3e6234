//! Multi-value bracket tokens: `(En,Fr,De)`, `(En+Ja)`, `(USA, Europe)`.

use crate::model::{CanonicalTag, TagSource, TagType};
use crate::normalize::normalize;
use crate::vocabulary::map_token;

/// Push `tag` unless an identical tag is already present.
fn push_distinct(out: &mut Vec<CanonicalTag>, tag: CanonicalTag) {
    if !out.contains(&tag) {
        out.push(tag);
    }
}

fn clean_part(part: &str) -> String {
    normalize(part).trim_matches('-').to_string()
}

fn is_language_sized(part: &str) -> bool {
    (2..=3).contains(&part.len())
}

/// Split a token listing several languages.
///
/// Commas (No-Intro) and plus signs (TOSEC) always split. A dash splits
/// only when every part looks like a language code, since dashes also join
/// region names. Returns `None` unless at least two distinct languages
/// were recognised.
pub fn parse_multi_language(token: &str) -> Option<Vec<CanonicalTag>> {
    let parts: Vec<String> = if token.contains(',') {
        token.split(',').map(clean_part).collect()
    } else if token.contains('+') {
        token.split('+').map(clean_part).collect()
    } else if token.contains('-') {
        let parts: Vec<String> = token.split('-').map(clean_part).collect();
        if !parts.iter().all(|p| is_language_sized(p)) {
            return None;
        }
        parts
    } else {
        return None;
    };

    let mut langs = Vec::new();
    for part in parts.iter().filter(|p| is_language_sized(p)) {
        for tag in map_token(part) {
            if tag.tag_type == TagType::Lang {
                push_distinct(&mut langs, tag.with_source(TagSource::Bracketed));
            }
        }
    }

    (langs.len() >= 2).then_some(langs)
}

/// Split a token listing several regions.
///
/// Splits on commas, or on dashes when there are none. Region and language
/// tags of each part are kept. Returns `None` unless at least two distinct
/// regions were recognised.
pub fn parse_multi_region(token: &str) -> Option<Vec<CanonicalTag>> {
    let separator = if token.contains(',') { ',' } else { '-' };

    let mut tags = Vec::new();
    for part in token.split(separator).map(clean_part) {
        if part.is_empty() {
            continue;
        }
        for tag in map_token(&part) {
            if matches!(tag.tag_type, TagType::Region | TagType::Lang) {
                push_distinct(&mut tags, tag.with_source(TagSource::Bracketed));
            }
        }
    }

    let regions = tags
        .iter()
        .filter(|t| t.tag_type == TagType::Region)
        .count();
    (regions >= 2).then_some(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(tags: Option<Vec<CanonicalTag>>) -> Option<Vec<String>> {
        tags.map(|tags| tags.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_comma_languages() {
        assert_eq!(
            rendered(parse_multi_language("en,fr,de")),
            Some(vec!["lang:en".into(), "lang:fr".into(), "lang:de".into()])
        );
    }

    #[test]
    fn test_plus_languages() {
        assert_eq!(
            rendered(parse_multi_language("en+ja")),
            Some(vec!["lang:en".into(), "lang:ja".into()])
        );
    }

    #[test]
    fn test_spaced_parts_after_normalization() {
        assert_eq!(
            rendered(parse_multi_language(&normalize("En, Fr"))),
            Some(vec!["lang:en".into(), "lang:fr".into()])
        );
    }

    #[test]
    fn test_dash_languages_only_when_all_parts_fit() {
        assert_eq!(
            rendered(parse_multi_language("de-fr")),
            Some(vec!["lang:de".into(), "lang:fr".into()])
        );
        assert_eq!(parse_multi_language("ch-trad"), None);
        assert_eq!(parse_multi_language("new-zealand"), None);
    }

    #[test]
    fn test_single_language_rejected() {
        assert_eq!(parse_multi_language("en"), None);
        assert_eq!(parse_multi_language("en,en"), None);
        assert_eq!(parse_multi_language("en,xyz"), None);
        assert_eq!(parse_multi_language("a500+"), None);
    }

    #[test]
    fn test_regions() {
        assert_eq!(
            rendered(parse_multi_region(&normalize("USA, Europe"))),
            Some(vec!["region:us".into(), "lang:en".into(), "region:eu".into()])
        );
        assert_eq!(
            rendered(parse_multi_region("japan-korea")),
            Some(vec![
                "region:jp".into(),
                "lang:ja".into(),
                "region:kr".into(),
                "lang:ko".into()
            ])
        );
    }

    #[test]
    fn test_region_languages_deduplicated() {
        assert_eq!(
            rendered(parse_multi_region("usa,canada")),
            Some(vec!["region:us".into(), "lang:en".into(), "region:ca".into()])
        );
    }

    #[test]
    fn test_single_region_rejected() {
        assert_eq!(parse_multi_region("usa"), None);
        assert_eq!(parse_multi_region("new-zealand"), None);
        assert_eq!(parse_multi_region("pal-60"), None);
        assert_eq!(parse_multi_region(",,,"), None);
    }

    #[test]
    fn test_sources_are_bracketed() {
        let tags = parse_multi_region("us,eu").unwrap_or_default();
        assert!(tags.iter().all(|t| t.source == TagSource::Bracketed));
    }
}
