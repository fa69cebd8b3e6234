use romtag_parser::config::ParserConfig;
use romtag_parser::numbering::detect_list_numbering;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSettings,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserSettings {
    /// Strip `"01 - "` style prefixes from every title
    #[serde(default)]
    pub strip_leading_numbers: bool,

    /// Decide leading-number stripping per directory during scans
    #[serde(default = "default_true")]
    pub auto_detect_numbering: bool,

    /// Attach filename tags to scan results
    #[serde(default = "default_true")]
    pub filename_tags: bool,

    /// Add an `extension:<ext>` tag to scan results
    #[serde(default = "default_true")]
    pub extension_tag: bool,

    /// Per-filename tag ceiling
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            strip_leading_numbers: false,
            auto_detect_numbering: true,
            filename_tags: true,
            extension_tag: true,
            max_tags: default_max_tags(),
        }
    }
}

impl ParserSettings {
    /// Parser configuration for these settings.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::builder()
            .strip_leading_numbers(self.strip_leading_numbers)
            .filename_tags(self.filename_tags)
            .extension_tag(self.extension_tag)
            .max_tags(self.max_tags)
            .build()
    }

    /// Whether titles for `names`, taken from one listing, lose their
    /// leading list numbers.
    pub fn strips_leading_numbers<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.strip_leading_numbers
            || (self.auto_detect_numbering && detect_list_numbering(names))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Extensions to include (empty means every known media extension)
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default = "default_true")]
    pub follow_links: bool,

    /// Maximum directory depth below the scan root
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Worker threads for parsing (0 uses the rayon default)
    #[serde(default)]
    pub threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            follow_links: true,
            max_depth: None,
            threads: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// One of `text`, `json` or `jsonl`
    #[serde(default = "default_format")]
    pub format: String,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: false,
        }
    }
}

/// Output formats accepted in `[output] format`.
pub const OUTPUT_FORMATS: &[&str] = &["text", "json", "jsonl"];

fn default_true() -> bool {
    true
}

fn default_max_tags() -> usize {
    100
}

fn default_format() -> String {
    "text".to_string()
}
