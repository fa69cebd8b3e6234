//! Display-title cleanup.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static RE_GROUP_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[A-Z][A-Z0-9]{2,}$").expect("valid regex"));

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19[789]\d|20\d{2})\b").expect("valid regex"));

static RE_ARTIFACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:",
        // resolution
        r"480p|576p|720p|1080[pi]|2160p|4k|uhd|",
        // source
        r"blu-?ray|brrip|bdrip|web[\s-]?dl|webrip|web|hdtv|dvdrip|dvd|hdrip|remux|",
        r"hdcam|cam|telesync|ts|",
        // codec and audio
        r"x26[45]|h[\s.]?26[45]|hevc|avc|xvid|divx|aac|ac3|dts|dd5[\s.]1|atmos|10bit|",
        // hdr
        r"hdr10|hdr|dolby[\s.]?vision|dv|",
        // scene status
        r"proper|repack|internal|limited|extended|unrated|remastered|dubbed|subbed|multi",
        r")\b",
    ))
    .expect("valid regex")
});

static RE_SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bS\d{1,4}E\d{1,4}\b").expect("valid regex"));

static RE_LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.\s-]+").expect("valid regex"));

static RE_MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const SEPARATORS: [char; 3] = ['.', '_', '-'];

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if (2..=4).contains(&ext.len())
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
                && ext.chars().any(|c| c.is_ascii_alphabetic()) =>
        {
            stem
        }
        _ => name,
    }
}

/// No spaces and at least two separators: `The.Dark.Knight`, `mega_man_x`.
fn is_scene_style(name: &str) -> bool {
    !name.contains(' ') && name.matches(SEPARATORS).count() >= 2
}

fn strip_artifacts(title: &str) -> String {
    if let Some(year) = RE_YEAR.find_iter(title).last() {
        let (head, tail) = title.split_at(year.end());
        return format!("{head}{}", RE_ARTIFACT.replace_all(tail, " "));
    }
    let stripped = RE_ARTIFACT.replace_all(title, " ");
    // A title made only of artifact words ("Cam") is still the title.
    if strip_brackets(&stripped).trim().is_empty() {
        return title.to_string();
    }
    stripped.into_owned()
}

fn strip_leading_number(title: &str) -> &str {
    let Some(m) = RE_LEADING_NUMBER.find(title) else {
        return title;
    };
    let rest = &title[m.end()..];
    // "1942 (USA)" is a title, not a list entry.
    match rest.chars().next() {
        None | Some('(' | '[' | '{' | '<') => title,
        Some(_) => rest,
    }
}

/// Remove every bracket-delimited span, nested or not.
///
/// Each bracket kind keeps its own depth; a closer without an opener is
/// dropped.
pub fn strip_brackets(s: &str) -> String {
    let mut depth = [0usize; 4];
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        let slot = match c {
            '(' | ')' => 0,
            '[' | ']' => 1,
            '{' | '}' => 2,
            '<' | '>' => 3,
            _ => {
                if depth.iter().all(|&d| d == 0) {
                    out.push(c);
                }
                continue;
            }
        };
        if matches!(c, '(' | '[' | '{' | '<') {
            depth[slot] += 1;
        } else {
            depth[slot] = depth[slot].saturating_sub(1);
        }
    }

    out
}

/// Extract a human-readable title from a filename.
///
/// A trailing release group is cut, scene-style separators become spaces
/// and release artifacts are removed; anything in brackets is dropped; a year that
/// only appeared in brackets is kept on the end. `strip_leading_numbers`
/// removes a `"01 - "` style prefix and should only be set when the
/// surrounding directory is known to be a numbered list.
///
/// # Examples
///
/// ```
/// use romtag_parser::extract_title;
///
/// assert_eq!(extract_title("Super Mario Bros (USA) [!].nes", false), "Super Mario Bros");
/// assert_eq!(
///     extract_title("The.Dark.Knight.2008.1080p.BluRay.x264-GROUP.mkv", false),
///     "The Dark Knight 2008"
/// );
/// ```
pub fn extract_title(filename: &str, strip_leading_numbers: bool) -> String {
    let mut title = strip_extension(filename).to_string();

    if let Some(m) = RE_GROUP_SUFFIX.find(&title) {
        title.truncate(m.start());
    }
    if is_scene_style(&title) {
        title = title.replace(SEPARATORS, " ");
    }

    title = strip_artifacts(&title);
    title = RE_SEASON_EPISODE.replace_all(&title, " ").into_owned();

    if strip_leading_numbers {
        title = strip_leading_number(title.trim_start()).to_string();
    }

    let year = RE_YEAR.find(&title).map(|m| m.as_str().to_string());
    title = strip_brackets(&title);
    if let Some(year) = year {
        if !RE_YEAR.is_match(&title) {
            title.push(' ');
            title.push_str(&year);
        }
    }

    let title = RE_MULTI_SPACE.replace_all(&title, " ").trim().to_string();
    trace!(filename, title = %title, "extracted title");
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rom_titles() {
        assert_eq!(extract_title("Super Mario Bros (USA) [!].nes", false), "Super Mario Bros");
        assert_eq!(extract_title("Super_Mario_Bros (USA).sfc", false), "Super_Mario_Bros");
        assert_eq!(extract_title("Sonic & Knuckles (USA).md", false), "Sonic & Knuckles");
        assert_eq!(
            extract_title("Street Fighter II: The World Warrior (World).zip", false),
            "Street Fighter II: The World Warrior"
        );
        assert_eq!(extract_title("1942 (USA).nes", false), "1942");
    }

    #[test]
    fn test_separator_heuristic() {
        assert_eq!(extract_title("legend_of_zelda.sfc", false), "legend of zelda");
        assert_eq!(extract_title("mega-man-x.sfc", false), "mega man x");
        assert_eq!(extract_title("Spider-Man.sfc", false), "Spider-Man");
        assert_eq!(extract_title("F-Zero.sfc", false), "F-Zero");
    }

    #[test]
    fn test_scene_release() {
        assert_eq!(
            extract_title("The.Dark.Knight.2008.1080p.BluRay.x264-GROUP.mkv", false),
            "The Dark Knight 2008"
        );
        assert_eq!(
            extract_title("Heat.1995.REMASTERED.2160p.UHD.BluRay.x265.HDR10.DTS-GRP.mkv", false),
            "Heat 1995"
        );
    }

    #[test]
    fn test_artifact_words_before_year_survive() {
        assert_eq!(extract_title("Cam.2018.1080p.WEB-DL.x264-GROUP.mkv", false), "Cam 2018");
        assert_eq!(extract_title("IT.2017.1080p.BluRay.x264-GROUP.mkv", false), "IT 2017");
        assert_eq!(extract_title("Cam.mp4", false), "Cam");
    }

    #[test]
    fn test_group_suffix_on_spaced_name() {
        assert_eq!(
            extract_title("The Dark Knight 2008 1080p BluRay x264-GROUP.mkv", false),
            "The Dark Knight 2008"
        );
        assert_eq!(extract_title("Spider-Man.sfc", false), "Spider-Man");
    }

    #[test]
    fn test_artifacts_without_year() {
        assert_eq!(extract_title("Movie Name PROPER REPACK.mkv", false), "Movie Name");
        assert_eq!(extract_title("Some.Show.PROPER.DUBBED.mkv", false), "Some Show");
        assert_eq!(extract_title("Cam (USA).mp4", false), "Cam");
    }

    #[test]
    fn test_episode_without_year() {
        assert_eq!(
            extract_title("Show.Name.S01E02.720p.HDTV.x264-GRP.mkv", false),
            "Show Name"
        );
    }

    #[test]
    fn test_leading_numbers() {
        assert_eq!(extract_title("1. Game Title (USA).nes", true), "Game Title");
        assert_eq!(extract_title("01 - Game Title.nes", true), "Game Title");
        assert_eq!(extract_title("01 - Game Title.nes", false), "01 - Game Title");
        assert_eq!(extract_title("1942 (USA).nes", true), "1942");
    }

    #[test]
    fn test_bracketed_year_is_kept() {
        assert_eq!(extract_title("Elite (1984)(Acornsoft).ssd", false), "Elite 1984");
        assert_eq!(extract_title("Movie (2010) [1080p].mkv", false), "Movie 2010");
    }

    #[test]
    fn test_extension_rules() {
        assert_eq!(extract_title("Final Fantasy V T+Eng v1.1", false), "Final Fantasy V T+Eng v1.1");
        assert_eq!(extract_title("Mr. Do (USA)", false), "Mr. Do");
        assert_eq!(extract_title("Game.7z", false), "Game");
    }

    #[test]
    fn test_strip_brackets_nested_and_unbalanced() {
        assert_eq!(strip_brackets("A (b [c] (d)) E"), "A  E");
        assert_eq!(strip_brackets("A ) B ] C"), "A  B  C");
        assert_eq!(strip_brackets("A (unclosed"), "A ");
        assert_eq!(strip_brackets("A {x} <y> B"), "A   B");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(extract_title("", false), "");
        assert_eq!(extract_title("()[]{}<>", false), "");
        assert_eq!(extract_title("((((((((((", true), "");
        assert_eq!(extract_title("\u{0}\u{1} Game \u{7f}", false), "\u{0}\u{1} Game \u{7f}");
    }

    #[test]
    fn test_deterministic() {
        let name = "Cam.2018.1080p.WEB-DL.x264-GROUP.mkv";
        assert_eq!(extract_title(name, false), extract_title(name, false));
    }
}
