//! Path utilities for detecting media files by extension.
//!
//! The scanner only hands files with one of these extensions to the
//! parser. Matching is case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Cartridge and computer ROM images.
const ROM_EXTENSIONS: &[&str] = &[
    "nes", "fds", "sfc", "smc", "fig", "gb", "gbc", "gba", "nds", "3ds", "n64", "z64", "v64",
    "md", "gen", "smd", "32x", "sms", "gg", "pce", "a26", "a52", "a78", "lnx", "ngp", "ngc",
    "ws", "wsc", "col", "int", "vb", "adf", "ipf", "ssd", "dsk", "tap", "tzx", "d64", "t64",
    "prg", "st", "rom",
];

/// Optical disc images and playlists.
const DISC_EXTENSIONS: &[&str] = &[
    "iso", "bin", "cue", "chd", "cso", "gdi", "cdi", "img", "mdf", "nrg", "pbp", "rvz", "wbfs",
    "m3u",
];

/// Archives commonly holding a single ROM.
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "7z", "rar"];

const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv",
];

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "opus", "wav", "m4a", "aac"];

const COMIC_EXTENSIONS: &[&str] = &["cbz", "cbr", "cb7", "pdf", "epub"];

/// Broad category of a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Rom,
    Disc,
    Archive,
    Video,
    Audio,
    Comic,
}

impl MediaKind {
    /// Every kind, in lookup order.
    pub const ALL: [MediaKind; 6] = [
        MediaKind::Rom,
        MediaKind::Disc,
        MediaKind::Archive,
        MediaKind::Video,
        MediaKind::Audio,
        MediaKind::Comic,
    ];

    /// Extensions belonging to this kind, lowercase and without the dot.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Rom => ROM_EXTENSIONS,
            MediaKind::Disc => DISC_EXTENSIONS,
            MediaKind::Archive => ARCHIVE_EXTENSIONS,
            MediaKind::Video => VIDEO_EXTENSIONS,
            MediaKind::Audio => AUDIO_EXTENSIONS,
            MediaKind::Comic => COMIC_EXTENSIONS,
        }
    }

    /// Kind for a bare extension such as `"SFC"` or `".sfc"`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext.as_str()))
    }

    /// Kind for a path, judged by its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use romtag_common::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_path(Path::new("Game (USA).SFC")), Some(MediaKind::Rom));
    /// assert_eq!(MediaKind::from_path(Path::new("notes.txt")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Rom => "rom",
            MediaKind::Disc => "disc",
            MediaKind::Archive => "archive",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Comic => "comic",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if a path has any known media extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use romtag_common::paths::is_media_file;
///
/// assert!(is_media_file(Path::new("/roms/snes/Chrono Trigger (USA).sfc")));
/// assert!(is_media_file(Path::new("Final Fantasy VII (Disc 1).CHD")));
/// assert!(!is_media_file(Path::new("readme.txt")));
/// ```
pub fn is_media_file(path: &Path) -> bool {
    MediaKind::from_path(path).is_some()
}

/// Check if a path's extension is in an explicit allow-list.
///
/// An empty list falls back to [`is_media_file`]. List entries may carry a
/// leading dot and any case.
pub fn matches_extensions(path: &Path, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return is_media_file(path);
    }
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    allowed
        .iter()
        .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Whether an extension belongs to any known media kind.
pub fn is_known_extension(ext: &str) -> bool {
    MediaKind::from_extension(ext).is_some()
}

/// Every known media extension.
///
/// # Examples
///
/// ```
/// use romtag_common::paths::all_extensions;
///
/// let extensions = all_extensions();
/// assert!(extensions.contains(&"nes"));
/// assert!(extensions.contains(&"chd"));
/// ```
#[must_use]
pub fn all_extensions() -> Vec<&'static str> {
    MediaKind::ALL
        .into_iter()
        .flat_map(MediaKind::extensions)
        .copied()
        .collect()
}
