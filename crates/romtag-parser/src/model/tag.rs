//! Canonical tag types.

use super::ParseError;
use crate::normalize::normalize;

/// Category of a canonical tag.
///
/// The string form of each variant is stable: it is the first half of the
/// `type:value` key used for deduplication downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TagType {
    Input,
    Players,
    GameGenre,
    Addon,
    Embedded,
    Save,
    ArcadeBoard,
    Compatibility,
    Disc,
    DiscTotal,
    Based,
    Search,
    Multigame,
    Reboxed,
    Port,
    Lang,
    Unfinished,
    Rerelease,
    Rev,
    Set,
    Alt,
    Unlicensed,
    MameParent,
    Region,
    Year,
    Video,
    Copyright,
    Dump,
    Media,
    Extension,
    Edition,
    Perspective,
    Art,
    Accessibility,
    Volume,
    Season,
    Episode,
    Issue,
    Track,
    Unknown,
}

impl TagType {
    /// Every tag type, in declaration order.
    pub const ALL: [TagType; 40] = [
        TagType::Input,
        TagType::Players,
        TagType::GameGenre,
        TagType::Addon,
        TagType::Embedded,
        TagType::Save,
        TagType::ArcadeBoard,
        TagType::Compatibility,
        TagType::Disc,
        TagType::DiscTotal,
        TagType::Based,
        TagType::Search,
        TagType::Multigame,
        TagType::Reboxed,
        TagType::Port,
        TagType::Lang,
        TagType::Unfinished,
        TagType::Rerelease,
        TagType::Rev,
        TagType::Set,
        TagType::Alt,
        TagType::Unlicensed,
        TagType::MameParent,
        TagType::Region,
        TagType::Year,
        TagType::Video,
        TagType::Copyright,
        TagType::Dump,
        TagType::Media,
        TagType::Extension,
        TagType::Edition,
        TagType::Perspective,
        TagType::Art,
        TagType::Accessibility,
        TagType::Volume,
        TagType::Season,
        TagType::Episode,
        TagType::Issue,
        TagType::Track,
        TagType::Unknown,
    ];

    /// The lowercase key used in `type:value` strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::Input => "input",
            TagType::Players => "players",
            TagType::GameGenre => "gamegenre",
            TagType::Addon => "addon",
            TagType::Embedded => "embedded",
            TagType::Save => "save",
            TagType::ArcadeBoard => "arcadeboard",
            TagType::Compatibility => "compatibility",
            TagType::Disc => "disc",
            TagType::DiscTotal => "disctotal",
            TagType::Based => "based",
            TagType::Search => "search",
            TagType::Multigame => "multigame",
            TagType::Reboxed => "reboxed",
            TagType::Port => "port",
            TagType::Lang => "lang",
            TagType::Unfinished => "unfinished",
            TagType::Rerelease => "rerelease",
            TagType::Rev => "rev",
            TagType::Set => "set",
            TagType::Alt => "alt",
            TagType::Unlicensed => "unlicensed",
            TagType::MameParent => "mameparent",
            TagType::Region => "region",
            TagType::Year => "year",
            TagType::Video => "video",
            TagType::Copyright => "copyright",
            TagType::Dump => "dump",
            TagType::Media => "media",
            TagType::Extension => "extension",
            TagType::Edition => "edition",
            TagType::Perspective => "perspective",
            TagType::Art => "art",
            TagType::Accessibility => "accessibility",
            TagType::Volume => "volume",
            TagType::Season => "season",
            TagType::Episode => "episode",
            TagType::Issue => "issue",
            TagType::Track => "track",
            TagType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TagType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TagType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParseError(format!("invalid tag type: {}", s)))
    }
}

/// Where a tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TagSource {
    /// Taken from an explicit bracket group or a bracketed special pattern.
    Bracketed,
    /// Inferred from free text outside brackets.
    Inferred,
    /// Not recorded (vocabulary lookups, tags parsed from strings).
    #[default]
    Unknown,
}

/// A `(type, value)` pair from the canonical vocabulary.
///
/// # Examples
///
/// ```
/// use romtag_parser::{CanonicalTag, TagType};
///
/// let tag = CanonicalTag::new(TagType::Region, "us");
/// assert_eq!(tag.to_string(), "region:us");
///
/// let bare = CanonicalTag::new(TagType::Media, "");
/// assert_eq!(bare.to_string(), "media");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalTag {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tag_type: TagType,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: TagSource,
}

impl CanonicalTag {
    /// Create a tag with an unrecorded source.
    pub fn new(tag_type: TagType, value: impl Into<String>) -> Self {
        Self {
            tag_type,
            value: value.into(),
            source: TagSource::Unknown,
        }
    }

    /// Create a tag that came from a bracket group.
    pub fn bracketed(tag_type: TagType, value: impl Into<String>) -> Self {
        Self::new(tag_type, value).with_source(TagSource::Bracketed)
    }

    /// Create a tag inferred from free text.
    pub fn inferred(tag_type: TagType, value: impl Into<String>) -> Self {
        Self::new(tag_type, value).with_source(TagSource::Inferred)
    }

    /// Replace the source, keeping type and value.
    pub fn with_source(mut self, source: TagSource) -> Self {
        self.source = source;
        self
    }

    /// Whether this tag has the given type and value.
    pub fn is(&self, tag_type: TagType, value: &str) -> bool {
        self.tag_type == tag_type && self.value == value
    }
}

impl std::fmt::Display for CanonicalTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.tag_type)
        } else {
            write!(f, "{}:{}", self.tag_type, self.value)
        }
    }
}

impl std::str::FromStr for CanonicalTag {
    type Err = ParseError;

    /// Parse `type` or `type:value`. The value is normalized and may itself
    /// contain colons (`dump:hacked:intro`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = match s.split_once(':') {
            Some((kind, value)) => (kind, normalize(value)),
            None => (s, String::new()),
        };
        Ok(CanonicalTag::new(kind.parse()?, value))
    }
}
