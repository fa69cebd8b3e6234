//! Composite keys handed to storage, and the title slug they are built on.
//!
//! Three key shapes are used downstream: `system:slug` to deduplicate
//! titles, `system:path` to deduplicate media files, and `type:value` to
//! deduplicate tags.

use crate::model::CanonicalTag;
use crate::parser::title::strip_brackets;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static RE_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{So}\p{Sc}]").expect("valid regex"));

static RE_CJK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}\x{30FC}\x{30FB}\x{3005}]")
        .expect("valid regex")
});

static RE_TRAILING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),\s*the\s*($|[\s:\-(\[])").expect("valid regex")
});

/// ` + `, ` 'n' `, ` 'n `, ` n' ` and ` n ` all read as "and".
static RE_CONJUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?:\+|'n'|'n|n'|n)\s+").expect("valid regex"));

static RE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:_\-]+").expect("valid regex"));

static RE_EDITION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\s+(?:version|edition|ausgabe|versione|edizione|versao|edicao|",
        r"バージョン|エディション|ヴァージョン)$",
    ))
    .expect("valid regex")
});

static RE_VERSION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+v\.?(?:\d{1,3}(?:\.\d{1,4})*|[IVX]{1,5})$").expect("valid regex")
});

/// Longest first. `X` alone is left as is ("Mega Man X").
const ROMAN_NUMERALS: [(&str, &str); 18] = [
    ("XIX", "19"),
    ("XVIII", "18"),
    ("XVII", "17"),
    ("XVI", "16"),
    ("XIV", "14"),
    ("XV", "15"),
    ("XIII", "13"),
    ("XII", "12"),
    ("XI", "11"),
    ("IX", "9"),
    ("VIII", "8"),
    ("VII", "7"),
    ("VI", "6"),
    ("IV", "4"),
    ("V", "5"),
    ("III", "3"),
    ("II", "2"),
    ("I", "1"),
];

const ARTICLES: [&str; 3] = ["the ", "a ", "an "];

fn strip_leading_article(s: &str) -> &str {
    let s = s.trim();
    for article in ARTICLES {
        if s.len() > article.len()
            && s.is_char_boundary(article.len())
            && s[..article.len()].eq_ignore_ascii_case(article)
        {
            return s[article.len()..].trim_start();
        }
    }
    s
}

/// Split on `:`, then ` - `, then `'s ` (which stays with the main part),
/// and drop a leading article from both halves.
fn split_and_strip_articles(s: &str) -> String {
    let s = s.trim();
    let split = s
        .split_once(':')
        .or_else(|| s.split_once(" - "))
        .or_else(|| s.find("'s ").map(|i| (&s[..i + 2], &s[i + 3..])));

    match split {
        Some((main, sub)) => format!(
            "{} {}",
            strip_leading_article(main),
            strip_leading_article(sub)
        )
        .trim()
        .to_string(),
        None => strip_leading_article(s).to_string(),
    }
}

/// Compatibility-fold Latin text and drop its diacritics. CJK text is only
/// composed, since folding would mangle kana.
fn fold_unicode(s: &str) -> String {
    let s = RE_SYMBOL.replace_all(s, "");
    if RE_CJK.is_match(&s) {
        return s.nfc().collect();
    }
    let folded: String = s.nfkc().collect();
    folded.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

fn is_roman_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Accented Latin letters, which keep "Václav" from turning into "5aclav".
fn is_latin_diacritic(c: char) -> bool {
    matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}') && c.is_alphabetic()
}

/// Replace standalone roman numerals I to XIX with digits and lowercase the rest.
fn convert_roman_numerals(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    'scan: while i < chars.len() {
        let at_boundary = match i.checked_sub(1).map(|p| chars[p]) {
            None => true,
            Some(prev) => !is_roman_word_char(prev) && !is_latin_diacritic(prev),
        };
        let next_is_diacritic = chars.get(i + 1).is_some_and(|&c| is_latin_diacritic(c));

        if at_boundary && !next_is_diacritic {
            for (numeral, digits) in ROMAN_NUMERALS {
                let end = i + numeral.len();
                let Some(window) = chars.get(i..end) else {
                    continue;
                };
                let matches = window
                    .iter()
                    .zip(numeral.chars())
                    .all(|(c, n)| c.to_ascii_uppercase() == n);
                if matches && chars.get(end).map_or(true, |&c| !is_roman_word_char(c)) {
                    out.push_str(digits);
                    i = end;
                    continue 'scan;
                }
            }
        }

        out.extend(chars[i].to_lowercase());
        i += 1;
    }

    out
}

/// Reduce a display title to a matching slug.
///
/// Folds Unicode (dropping Latin diacritics and symbols such as `™`),
/// drops a leading English article from the title and from a subtitle, and
/// drops a trailing `, The`. Conjunctions become `and`, bracket groups
/// and a final `Version`/`Edition` word or `v1.2` suffix go, and roman
/// numerals become digits. What remains is lowercased and reduced to
/// alphanumeric characters (any script).
///
/// ```
/// use romtag_parser::keys::slugify;
///
/// assert_eq!(slugify("The Legend of Zelda: A Link to the Past"), "legendofzeldalinktothepast");
/// assert_eq!(slugify("Pokémon Ruby Version (USA)"), "pokemonruby");
/// assert_eq!(slugify("Final Fantasy VII"), "finalfantasy7");
/// ```
pub fn slugify(title: &str) -> String {
    let s = fold_unicode(title.trim());
    let s = split_and_strip_articles(&s);
    let s = RE_TRAILING_ARTICLE.replace_all(&s, "$1");

    let s = s.replace('&', " and ");
    let s = RE_CONJUNCTION.replace_all(&s, " and ");
    let s = RE_SEPARATORS.replace_all(&s, " ");

    let s = strip_brackets(&s);
    let s = RE_EDITION_SUFFIX.replace(s.trim(), "");
    let s = RE_VERSION_SUFFIX.replace(s.trim(), "");

    convert_roman_numerals(s.trim())
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// `system:slug`, the title deduplication key.
pub fn title_key(system_id: &str, slug: &str) -> String {
    format!("{system_id}:{slug}")
}

/// `system:path`, the media file deduplication key.
pub fn media_key(system_id: &str, path: &str) -> String {
    format!("{system_id}:{path}")
}

/// `type:value`, the tag deduplication key.
pub fn tag_key(tag: &CanonicalTag) -> String {
    tag.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagType;

    #[test]
    fn test_slugify_articles() {
        assert_eq!(slugify("The Legend of Zelda"), "legendofzelda");
        assert_eq!(slugify("A Boy and His Blob"), "boyandhisblob");
        assert_eq!(slugify("An American Tail"), "americantail");
        assert_eq!(slugify("Zelda: The Minish Cap"), "zeldaminishcap");
        assert_eq!(slugify("Metroid - The Return"), "metroidreturn");
        assert_eq!(slugify("THE LAST OF US"), "lastofus");
        // only leading articles go
        assert_eq!(slugify("Theme Park"), "themepark");
        assert_eq!(slugify("Escape from the Planet"), "escapefromtheplanet");
        assert_eq!(slugify("1. The Legend of Zelda"), "1thelegendofzelda");
        assert_eq!(slugify("The"), "the");
    }

    #[test]
    fn test_slugify_trailing_article() {
        assert_eq!(slugify("Legend of Zelda, The"), "legendofzelda");
        assert_eq!(slugify("Legend of Zelda, The: Ocarina of Time"), "legendofzeldaocarinaoftime");
        assert_eq!(slugify("Legend of Zelda, The (USA) (Rev 1)"), "legendofzelda");
        assert_eq!(slugify("Game, The   -   Subtitle"), "gamesubtitle");
    }

    #[test]
    fn test_slugify_diacritics_and_symbols() {
        assert_eq!(slugify("Pokémon Red"), "pokemonred");
        assert_eq!(slugify("Café International"), "cafeinternational");
        assert_eq!(slugify("The Pokémon Stadium 2 (USA) [!]"), "pokemonstadium2");
        assert_eq!(slugify("Sonic™ Adventure"), "sonicadventure");
        assert_eq!(slugify("Game $99 Edition"), "game99");
        assert_eq!(slugify("Ｇａｍｅ"), "game");
        assert_eq!(slugify("Game\u{200B}Title"), "gametitle");
        assert_eq!(slugify("!@#$%"), "");
    }

    #[test]
    fn test_slugify_conjunctions_and_separators() {
        assert_eq!(slugify("Sonic & Knuckles"), "sonicandknuckles");
        assert_eq!(slugify("Rock + Roll Racing"), "rockandrollracing");
        assert_eq!(slugify("Rock 'n' Roll"), "rockandroll");
        assert_eq!(slugify("super_mario-bros"), "supermariobros");
        assert_eq!(slugify("F-Zero"), "fzero");
        assert_eq!(slugify("Game---Part___One"), "gamepartone");
    }

    #[test]
    fn test_slugify_brackets() {
        assert_eq!(slugify("Game (USA) [b1] [T+Eng]"), "game");
        assert_eq!(slugify("Game (Version (Final) [Beta])"), "game");
        assert_eq!(slugify("Zelda [Link's Awakening]"), "zelda");
        assert_eq!(slugify("(USA)"), "");
    }

    #[test]
    fn test_slugify_edition_suffix() {
        assert_eq!(slugify("Pokemon Ruby Version"), "pokemonruby");
        assert_eq!(slugify("Pokemon Emerald Version (USA)"), "pokemonemerald");
        assert_eq!(slugify("Skyrim Special Edition"), "skyrimspecial");
        assert_eq!(slugify("Test DeLuXe EdItIoN"), "testdeluxe");
        assert_eq!(slugify("Version Control System"), "versioncontrolsystem");
        assert_eq!(slugify("Street Fighter II: Championship Edition!"), "streetfighter2championshipedition");
        assert_eq!(slugify("Photoshop v2.1"), "photoshop");
    }

    #[test]
    fn test_slugify_roman_numerals() {
        assert_eq!(slugify("Final Fantasy VII"), "finalfantasy7");
        assert_eq!(slugify("Street Fighter II Turbo"), "streetfighter2turbo");
        assert_eq!(slugify("Game I: The Subtitle"), "game1subtitle");
        assert_eq!(slugify("game iii"), "game3");
        assert_eq!(slugify("Final Fantasy VII - Part II"), "finalfantasy7part2");
        assert_eq!(slugify("Mega Man X: Command Mission"), "megamanxcommandmission");
        assert_eq!(slugify("Ski Championship"), "skichampionship");
        assert_eq!(slugify("Phoenix Rising"), "phoenixrising");
        assert_eq!(slugify("ドラゴンクエストVII"), "ドラゴンクエスト7");
    }

    #[test]
    fn test_slugify_scripts() {
        assert_eq!(slugify("ドラゴンクエスト"), "ドラゴンクエスト");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        for title in [
            "The Legend of Zelda",
            "A",
            "Sonic & Knuckles",
            "Zelda: The Minish Cap",
            "Pokémon Red Version",
            "Final Fantasy VII (USA)",
        ] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(title_key("nes", "supermariobros"), "nes:supermariobros");
        assert_eq!(media_key("snes", "/roms/snes/Game.sfc"), "snes:/roms/snes/Game.sfc");
        assert_eq!(tag_key(&CanonicalTag::new(TagType::Region, "us")), "region:us");
        assert_eq!(tag_key(&CanonicalTag::new(TagType::Unknown, "")), "unknown");
    }
}
