//! Context-sensitive resolution of a single bracket token.
//!
//! The same token can mean different things depending on its bracket type,
//! where it sits in the tag sequence, and what has been resolved before it.
//! A handful of known-ambiguous tokens have named rules; everything else
//! goes through the vocabulary.

use super::split::{parse_multi_language, parse_multi_region};
use crate::model::{BracketType, CanonicalTag, ParseContext, TagSource, TagType};
use crate::normalize::normalize;
use crate::vocabulary::{language_code, map_token};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static RE_BRACKET_TRANSLATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^T([+-]?)([A-Za-z]{2,3})(?:.*?v(\d+(?:\.\d+)*))?").expect("valid regex")
});

/// Square-bracket tokens whose meaning is fixed regardless of context.
const SQUARE_LITERALS: &[(&str, &str)] = &[
    ("tr", "translated"),
    ("b", "bad"),
    ("h", "hacked"),
    ("f", "fixed"),
    ("cr", "cracked"),
    ("t", "trained"),
];

/// What a named rule gets to look at.
pub struct RuleInput<'a> {
    /// The normalized token.
    pub token: &'a str,
    pub bracket_type: BracketType,
    pub position: usize,
    pub ctx: &'a ParseContext,
}

impl RuleInput<'_> {
    fn has_region(&self) -> bool {
        self.ctx.has_type(TagType::Region)
    }

    fn has_language(&self) -> bool {
        self.ctx.has_type(TagType::Lang)
    }

    fn has_hardware(&self) -> bool {
        self.ctx.has_type(TagType::Addon) || self.ctx.has_type(TagType::Compatibility)
    }

    fn is_paren(&self) -> bool {
        self.bracket_type == BracketType::Paren
    }
}

/// A rule returns `None` to defer to the generic lookup.
pub type Rule = fn(&RuleInput<'_>) -> Option<Vec<CanonicalTag>>;

/// Named rules for tokens with more than one plausible meaning.
pub const AMBIGUOUS_RULES: &[(&str, Rule)] = &[
    ("ch", switzerland_or_chinese),
    ("tr", turkey_or_turkish),
    ("bs", bosnian),
    ("hi", hindi_or_hacked_intro),
    ("st", sufami_turbo),
    ("np", nintendo_power),
];

fn single(tag_type: TagType, value: &str) -> Option<Vec<CanonicalTag>> {
    Some(vec![CanonicalTag::bracketed(tag_type, value)])
}

/// `Ch` next to German is Switzerland; early in the sequence it is a
/// region; otherwise it is Chinese.
fn switzerland_or_chinese(input: &RuleInput<'_>) -> Option<Vec<CanonicalTag>> {
    if !input.is_paren() {
        return None;
    }
    if input.ctx.has_tag(TagType::Lang, "de") {
        return single(TagType::Region, "ch");
    }
    if !input.has_region() && input.position < 2 {
        return single(TagType::Region, "ch");
    }
    single(TagType::Lang, "zh")
}

/// In parentheses `Tr` is Turkey or Turkish, never "translated".
fn turkey_or_turkish(input: &RuleInput<'_>) -> Option<Vec<CanonicalTag>> {
    if !input.is_paren() {
        return None;
    }
    if !input.has_region() && input.position < 2 {
        return single(TagType::Region, "tr");
    }
    if !input.has_language() {
        return single(TagType::Lang, "tr");
    }
    single(TagType::Region, "tr")
}

fn bosnian(input: &RuleInput<'_>) -> Option<Vec<CanonicalTag>> {
    input.is_paren().then(|| vec![CanonicalTag::bracketed(TagType::Lang, "bs")])
}

fn hindi_or_hacked_intro(input: &RuleInput<'_>) -> Option<Vec<CanonicalTag>> {
    match input.bracket_type {
        BracketType::Paren => single(TagType::Lang, "hi"),
        BracketType::Square => Some(vec![
            CanonicalTag::bracketed(TagType::Dump, "hacked"),
            CanonicalTag::bracketed(TagType::Dump, "hacked:intro"),
        ]),
    }
}

fn sufami_turbo(input: &RuleInput<'_>) -> Option<Vec<CanonicalTag>> {
    (input.is_paren() && input.has_hardware())
        .then(|| vec![CanonicalTag::bracketed(TagType::Addon, "peripheral:sufami")])
}

fn nintendo_power(input: &RuleInput<'_>) -> Option<Vec<CanonicalTag>> {
    (input.is_paren() && input.has_hardware())
        .then(|| vec![CanonicalTag::bracketed(TagType::Addon, "online:nintendopower")])
}

fn apply_rule(input: &RuleInput<'_>) -> Option<Vec<CanonicalTag>> {
    AMBIGUOUS_RULES
        .iter()
        .find(|(token, _)| *token == input.token)
        .and_then(|(_, rule)| rule(input))
}

fn bracketed(tags: Vec<CanonicalTag>) -> Vec<CanonicalTag> {
    tags.into_iter()
        .map(|t| t.with_source(TagSource::Bracketed))
        .collect()
}

/// Resolve the context's current token to canonical tags.
///
/// Never returns an empty vector: unmapped parenthesis tokens become
/// `unknown:<token>` and unmapped square tokens become `dump:<token>`.
pub fn disambiguate(ctx: &ParseContext) -> Vec<CanonicalTag> {
    match ctx.current.bracket_type {
        BracketType::Square => map_square(ctx),
        BracketType::Paren => map_paren(ctx),
    }
}

fn map_square(ctx: &ParseContext) -> Vec<CanonicalTag> {
    let raw = ctx.current.value.trim();

    // '!' does not survive normalization.
    match raw {
        "!" => return vec![CanonicalTag::bracketed(TagType::Dump, "verified")],
        "!p" => return vec![CanonicalTag::bracketed(TagType::Dump, "pending")],
        _ => {}
    }

    if let Some(tags) = bracketed_translation(raw) {
        return tags;
    }

    let token = normalize(raw);
    if let Some(langs) = parse_multi_language(&token) {
        return langs;
    }

    if let Some(&(_, value)) = SQUARE_LITERALS.iter().find(|(key, _)| *key == token) {
        return vec![CanonicalTag::bracketed(TagType::Dump, value)];
    }

    let input = RuleInput {
        token: &token,
        bracket_type: BracketType::Square,
        position: ctx.current.position,
        ctx,
    };
    if let Some(tags) = apply_rule(&input) {
        return tags;
    }

    let dumps: Vec<CanonicalTag> = map_token(&token)
        .into_iter()
        .filter(|t| matches!(t.tag_type, TagType::Dump | TagType::Unlicensed))
        .collect();
    if !dumps.is_empty() {
        return bracketed(dumps);
    }

    vec![CanonicalTag::bracketed(TagType::Dump, token)]
}

/// `[T+Chi(Big5)100_Kuyagi]`, `[T-Ger v1.2]` and friends.
fn bracketed_translation(raw: &str) -> Option<Vec<CanonicalTag>> {
    let caps = RE_BRACKET_TRANSLATION.captures(raw)?;
    let sign = caps.get(1).map_or("", |m| m.as_str());
    let code = caps[2].to_lowercase();
    if sign.is_empty() && code.len() != 3 {
        return None;
    }

    let status = if sign == "-" {
        "translation:old"
    } else {
        "translation"
    };
    let mut tags = vec![CanonicalTag::bracketed(TagType::Unlicensed, status)];
    if let Some(lang) = map_token(&language_code(&code))
        .into_iter()
        .find(|t| t.tag_type == TagType::Lang)
    {
        tags.push(lang.with_source(TagSource::Bracketed));
    }
    if let Some(version) = caps.get(3) {
        let value = version.as_str().replace('.', "-");
        tags.push(CanonicalTag::bracketed(TagType::Rev, value));
    }

    trace!(token = raw, ?tags, "bracketed translation");
    Some(tags)
}

fn map_paren(ctx: &ParseContext) -> Vec<CanonicalTag> {
    let token = normalize(&ctx.current.value);

    if let Some(langs) = parse_multi_language(&token) {
        return langs;
    }
    if let Some(regions) = parse_multi_region(&token) {
        return regions;
    }

    let input = RuleInput {
        token: &token,
        bracket_type: BracketType::Paren,
        position: ctx.current.position,
        ctx,
    };
    if let Some(tags) = apply_rule(&input) {
        return tags;
    }

    let mapped = map_token(&token);
    if mapped.is_empty() {
        trace!(token = %token, "unknown parenthesis token");
        return vec![CanonicalTag::bracketed(TagType::Unknown, token)];
    }

    let conflicting = mapped
        .iter()
        .enumerate()
        .any(|(i, a)| mapped[..i].iter().any(|b| b.tag_type == a.tag_type));
    if conflicting {
        return select_best_mapping(
            &mapped,
            input.has_region(),
            input.has_language(),
            ctx.has_type(TagType::Rev),
            ctx.current.position,
        );
    }

    bracketed(mapped)
}

/// Pick one tag out of several same-typed candidates.
///
/// Region and language conventionally come first in a filename's tag
/// sequence, version and development status later:
///
/// - position 0-1: an unfilled region, else an unfilled language;
/// - position 2-4: an unfilled version, else a development status;
/// - otherwise, or when nothing above applies: the first option.
///
/// Returns an empty vector only when `options` is empty.
pub fn select_best_mapping(
    options: &[CanonicalTag],
    has_region: bool,
    has_language: bool,
    has_version: bool,
    position: usize,
) -> Vec<CanonicalTag> {
    let first_of = |tag_type: TagType| options.iter().find(|t| t.tag_type == tag_type);

    let mut choice = None;
    if position < 2 {
        if !has_region {
            choice = first_of(TagType::Region);
        }
        if choice.is_none() && !has_language {
            choice = first_of(TagType::Lang);
        }
    } else if position < 5 {
        if !has_version {
            choice = first_of(TagType::Rev);
        }
        if choice.is_none() {
            choice = first_of(TagType::Unfinished);
        }
    }

    choice
        .or_else(|| options.first())
        .map(|t| vec![t.clone().with_source(TagSource::Bracketed)])
        .unwrap_or_default()
}
