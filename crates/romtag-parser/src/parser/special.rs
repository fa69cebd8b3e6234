//! High-confidence patterns pulled out of the raw filename.
//!
//! Steps run in a fixed order. Each one sees the remainder left by the
//! previous step, so a span consumed early (a disc marker, a revision) can
//! never be read again as a bracket token.

use crate::model::{CanonicalTag, TagSource, TagType};
use crate::vocabulary::{language_code, map_token};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::trace;

static RE_DISC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(Disc\s+(\d+)\s+of\s+(\d+)\)").expect("valid regex"));

static RE_REV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(Rev[\s-]([A-Z0-9]+)\)").expect("valid regex"));

static RE_VOLUME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:volume\s*|vol\.\s*)(\d+)\b").expect("valid regex"));

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(v(\d+(?:\.\d+)*)\)").expect("valid regex"));

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((19[789]\d|20\d{2})\)").expect("valid regex"));

static RE_SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bS(\d{1,4})E(\d{1,4})\b").expect("valid regex"));

static RE_ISSUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:#\s*|\bissue\s+|\bno\.\s*)(\d+)\b").expect("valid regex")
});

static RE_TRACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?i:track)[\s_-]*(\d{1,3})\b(?:\s*-\s*)?|(\d{1,2})\s*-\s+)")
        .expect("valid regex")
});

static RE_LEADING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:19[789]\d|20\d{2})(?:\D|$)").expect("valid regex"));

static RE_TRANSLATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)(T)([+-]?)([A-Za-z]{2,3})(?:\s+v(\d+(?:\.\d+)*))?(?:\s|[.]|$)")
        .expect("valid regex")
});

static RE_BARE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bv(\d+(?:\.\d+)*)").expect("valid regex"));

static RE_EDITION_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s+(version|edition|ausgabe|versione|edizione|versao|edicao|バージョン|エディション|ヴァージョン)(\s*[\(\[{<]|\s*$)",
    )
    .expect("valid regex")
});

const VERSION_WORDS: &[&str] = &["version", "versione", "versao", "バージョン", "ヴァージョン"];

/// Tags found so far and the text they were removed from.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub tags: Vec<CanonicalTag>,
    pub remainder: String,
}

impl Extraction {
    fn new(filename: &str) -> Self {
        Self {
            tags: Vec::new(),
            remainder: filename.to_string(),
        }
    }

    /// Delete a span of the remainder.
    fn cut(&mut self, range: Range<usize>) {
        self.remainder.replace_range(range, "");
    }

    /// Replace a span of the remainder with a single space.
    fn blank(&mut self, range: Range<usize>) {
        self.remainder.replace_range(range, " ");
    }

    fn has_type(&self, tag_type: TagType) -> bool {
        self.tags.iter().any(|t| t.tag_type == tag_type)
    }
}

type Step = fn(&mut Extraction);

const STEPS: &[(&str, Step)] = &[
    ("disc", disc),
    ("rev", revision),
    ("volume", volume),
    ("version", version),
    ("year", year),
    ("season_episode", season_episode),
    ("issue", issue),
    ("track", track),
    ("translation", translation),
    ("bare_version", bare_version),
    ("edition_word", edition_word),
];

/// Run every special pattern over `filename`, in order.
///
/// # Examples
///
/// ```
/// use romtag_parser::parser::special::extract_special_patterns;
///
/// let found = extract_special_patterns("Final Fantasy VII (Disc 1 of 3)(USA).bin");
/// let tags: Vec<String> = found.tags.iter().map(|t| t.to_string()).collect();
/// assert_eq!(tags, ["media:disc", "disc:1", "disctotal:3"]);
/// assert_eq!(found.remainder, "Final Fantasy VII (USA).bin");
/// ```
pub fn extract_special_patterns(filename: &str) -> Extraction {
    let mut extraction = Extraction::new(filename);
    for (name, step) in STEPS {
        let before = extraction.tags.len();
        step(&mut extraction);
        if extraction.tags.len() > before {
            trace!(step = *name, tags = ?&extraction.tags[before..], "special pattern matched");
        }
    }
    extraction
}

/// Leading zeros removed, `"0"` when nothing else remains.
fn strip_zeros(digits: &str) -> String {
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        rest => rest.to_string(),
    }
}

fn dotted(version: &str) -> String {
    version.replace('.', "-")
}

fn disc(ex: &mut Extraction) {
    let Some(caps) = RE_DISC.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let tags = [
        CanonicalTag::bracketed(TagType::Media, "disc"),
        CanonicalTag::bracketed(TagType::Disc, &caps[1]),
        CanonicalTag::bracketed(TagType::DiscTotal, &caps[2]),
    ];
    ex.tags.extend(tags);
    ex.cut(range);
}

fn revision(ex: &mut Extraction) {
    let Some(caps) = RE_REV.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let value = dotted(&caps[1].to_lowercase());
    ex.tags.push(CanonicalTag::bracketed(TagType::Rev, value));
    ex.cut(range);
}

fn volume(ex: &mut Extraction) {
    let Some(caps) = RE_VOLUME.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let value = strip_zeros(&caps[1]);
    ex.tags.push(CanonicalTag::inferred(TagType::Volume, value));
    ex.cut(range);
}

fn version(ex: &mut Extraction) {
    let Some(caps) = RE_VERSION.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let value = dotted(&caps[1]);
    ex.tags.push(CanonicalTag::bracketed(TagType::Rev, value));
    ex.cut(range);
}

fn year(ex: &mut Extraction) {
    let Some(caps) = RE_YEAR.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    ex.tags.push(CanonicalTag::bracketed(TagType::Year, &caps[1]));
    ex.cut(range);
}

fn season_episode(ex: &mut Extraction) {
    let Some(caps) = RE_SEASON_EPISODE.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let tags = [
        CanonicalTag::inferred(TagType::Season, strip_zeros(&caps[1])),
        CanonicalTag::inferred(TagType::Episode, strip_zeros(&caps[2])),
    ];
    ex.tags.extend(tags);
    ex.cut(range);
}

fn issue(ex: &mut Extraction) {
    let Some(caps) = RE_ISSUE.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let value = strip_zeros(&caps[1]);
    ex.tags.push(CanonicalTag::inferred(TagType::Issue, value));
    ex.cut(range);
}

fn track(ex: &mut Extraction) {
    // "1985 - Song.mp3" is a year, never track 19 or 198.
    if RE_LEADING_YEAR.is_match(&ex.remainder) {
        return;
    }
    let Some(caps) = RE_TRACK.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let Some(number) = caps.get(1).or_else(|| caps.get(2)) else {
        return;
    };
    let value = strip_zeros(number.as_str());
    ex.tags.push(CanonicalTag::inferred(TagType::Track, value));
    ex.cut(range);
}

fn translation(ex: &mut Extraction) {
    // Without a sign only three-letter codes count.
    let Some(caps) = RE_TRANSLATION.captures_iter(&ex.remainder).find(|caps| {
        caps.get(3).is_some_and(|m| !m.is_empty()) || caps[4].len() == 3
    }) else {
        return;
    };
    let sign = caps.get(3).map_or("", |m| m.as_str());
    let code = caps[4].to_lowercase();

    let range = caps.get_match().range();
    let version = caps.get(5).map(|m| dotted(m.as_str()));

    let status = if sign == "-" {
        "translation:old"
    } else {
        "translation"
    };
    ex.tags.push(CanonicalTag::inferred(TagType::Unlicensed, status));
    if let Some(lang) = map_token(&language_code(&code))
        .into_iter()
        .find(|t| t.tag_type == TagType::Lang)
    {
        ex.tags.push(lang.with_source(TagSource::Inferred));
    }
    if let Some(version) = version {
        ex.tags.push(CanonicalTag::inferred(TagType::Rev, version));
    }
    ex.blank(range);
}

fn bare_version(ex: &mut Extraction) {
    if ex.has_type(TagType::Rev) {
        return;
    }
    let Some(caps) = RE_BARE_VERSION.captures(&ex.remainder) else {
        return;
    };
    let range = caps.get_match().range();
    let value = dotted(&caps[1]);
    ex.tags.push(CanonicalTag::inferred(TagType::Rev, value));
    ex.cut(range);
}

/// Tags the edition word but leaves it in place for title cleanup.
fn edition_word(ex: &mut Extraction) {
    let Some(caps) = RE_EDITION_WORD.captures(&ex.remainder) else {
        return;
    };
    let word = caps[1].to_lowercase();
    let value = if VERSION_WORDS.contains(&word.as_str()) {
        "version"
    } else {
        "edition"
    };
    ex.tags.push(CanonicalTag::inferred(TagType::Edition, value));
}
