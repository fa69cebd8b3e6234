//! Everything derived from one media path: display title, slug, tags.

use crate::config::ParserConfig;
use crate::keys::slugify;
use crate::model::{CanonicalTag, TagType};
use crate::parser::{parse_with_config, title::extract_title};

/// Derived fields for one media path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFragments {
    /// Slash-normalized path, or the original string for URIs.
    pub path: String,
    /// Base name without its extension.
    pub file_name: String,
    /// Lowercased extension including the dot, or empty.
    pub ext: String,
    pub title: String,
    /// Never empty unless the file name is.
    pub slug: String,
    /// Rendered `type:value` tags.
    pub tags: Vec<String>,
}

fn is_uri(path: &str) -> bool {
    path.contains("://")
}

fn split_extension(base: &str) -> (&str, String) {
    match base.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            (stem, format!(".{}", ext.to_ascii_lowercase()))
        }
        _ => (base, String::new()),
    }
}

/// Compute title, slug and tags for a path.
///
/// URIs (`scheme://...`) are kept verbatim and never get an extension.
///
/// ```
/// use romtag_parser::config::ParserConfig;
/// use romtag_parser::fragments::path_fragments;
///
/// let f = path_fragments("roms\\nes\\Super Mario Bros (USA)[!].NES", &ParserConfig::default());
/// assert_eq!(f.path, "roms/nes/Super Mario Bros (USA)[!].NES");
/// assert_eq!(f.ext, ".nes");
/// assert_eq!(f.title, "Super Mario Bros");
/// assert_eq!(f.slug, "supermariobros");
/// assert_eq!(f.tags, ["region:us", "lang:en", "dump:verified", "extension:nes"]);
/// ```
pub fn path_fragments(path: &str, config: &ParserConfig) -> PathFragments {
    let uri = is_uri(path);
    let path = if uri {
        path.to_string()
    } else {
        path.replace('\\', "/")
    };

    let base = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    let (file_name, ext) = if uri {
        (base, String::new())
    } else {
        split_extension(base)
    };
    let file_name = file_name.to_string();

    let title = extract_title(&file_name, config.strip_leading_numbers);
    let mut slug = slugify(&title);
    if slug.is_empty() {
        slug = file_name.to_lowercase();
    }

    let mut tags = Vec::new();
    if config.filename_tags {
        tags.extend(
            parse_with_config(&file_name, config)
                .iter()
                .map(CanonicalTag::to_string),
        );
        if config.extension_tag && !ext.is_empty() {
            tags.push(CanonicalTag::new(TagType::Extension, &ext[1..]).to_string());
        }
    }

    PathFragments {
        path,
        file_name,
        ext,
        title,
        slug,
        tags,
    }
}
