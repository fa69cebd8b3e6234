//! Token normalization.
//!
//! Every vocabulary key is in normalized form, so lookups always go through
//! [`normalize`] first.

use regex::Regex;
use std::sync::LazyLock;

static RE_COLON_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*:\s*").expect("valid regex"));

/// Canonicalize a raw token for use as a lookup key.
///
/// Trims, removes whitespace around colons, lowercases, turns spaces and
/// periods into dashes and finally drops anything outside `[a-z0-9:,+-]`.
/// The output alphabet is closed under the same steps, so the function is
/// idempotent.
///
/// # Examples
///
/// ```
/// use romtag_parser::normalize;
///
/// assert_eq!(normalize("  Rev 1.1 "), "rev-1-1");
/// assert_eq!(normalize("Hacked : Intro"), "hacked:intro");
/// assert_eq!(normalize("Ελληνικά!"), "");
/// ```
pub fn normalize(s: &str) -> String {
    let spaced = RE_COLON_SPACING.replace_all(s.trim(), ":");
    spaced
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '.' => Some('-'),
            'a'..='z' | '0'..='9' | ':' | ',' | '+' | '-' => Some(c),
            _ => None,
        })
        .collect()
}
