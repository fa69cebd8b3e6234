//! Detection of list-style numbering across a directory.
//!
//! `"01 - Game.nes"` is a list entry in a folder of numbered files, but
//! `"1942.nes"` or `"2 On 2 Open Ice Challenge.zip"` are titles. The
//! decision is made over the whole directory, never one name at a time.

use regex::Regex;
use std::sync::LazyLock;

static RE_LIST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[.\s-]+[^\d\s.-]").expect("valid regex"));

const MIN_NAMES: usize = 3;

fn is_year(digits: &str) -> bool {
    digits.len() == 4 && matches!(digits.parse::<u16>(), Ok(1970..=2099))
}

fn without_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if (1..=4).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            stem
        }
        _ => name,
    }
}

/// Whether a single name starts with a list-number prefix.
pub fn has_list_prefix(name: &str) -> bool {
    RE_LIST_PREFIX
        .captures(without_extension(name.trim_start()))
        .is_some_and(|caps| !is_year(&caps[1]))
}

/// Whether a set of sibling names uses list-style numbering.
///
/// True when there are at least three names and more than half of them
/// start with a number followed by a separator and text. Year-like
/// prefixes do not count.
///
/// ```
/// use romtag_parser::numbering::detect_list_numbering;
///
/// assert!(detect_list_numbering(&["01 - Alpha.nes", "02 - Beta.nes", "03 - Gamma.nes"]));
/// assert!(!detect_list_numbering(&["1942.nes", "Contra.nes", "Gradius.nes"]));
/// ```
pub fn detect_list_numbering<S: AsRef<str>>(names: &[S]) -> bool {
    if names.len() < MIN_NAMES {
        return false;
    }
    let numbered = names
        .iter()
        .filter(|name| has_list_prefix(name.as_ref()))
        .count();
    numbered * 2 > names.len()
}
