//! Parser configuration.

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use romtag_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .strip_leading_numbers(true)
///     .max_tags(32)
///     .build();
/// assert!(config.strip_leading_numbers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Remove `"01 - "` style prefixes from titles.
    /// Only meaningful for directories known to use list numbering.
    /// Default: false
    pub strip_leading_numbers: bool,

    /// Whether path fragments carry filename tags at all.
    /// Default: true
    pub filename_tags: bool,

    /// Whether path fragments get an `extension:<ext>` tag.
    /// Default: true
    pub extension_tag: bool,

    /// Upper bound on tags returned for one filename.
    /// Default: 100
    pub max_tags: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strip_leading_numbers: false,
            filename_tags: true,
            extension_tag: true,
            max_tags: 100,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    strip_leading_numbers: Option<bool>,
    filename_tags: Option<bool>,
    extension_tag: Option<bool>,
    max_tags: Option<usize>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether leading list numbers are stripped from titles.
    ///
    /// Default: false
    pub fn strip_leading_numbers(mut self, enabled: bool) -> Self {
        self.strip_leading_numbers = Some(enabled);
        self
    }

    /// Set whether path fragments carry filename tags.
    ///
    /// Default: true
    pub fn filename_tags(mut self, enabled: bool) -> Self {
        self.filename_tags = Some(enabled);
        self
    }

    /// Set whether path fragments get an extension tag.
    ///
    /// Default: true
    pub fn extension_tag(mut self, enabled: bool) -> Self {
        self.extension_tag = Some(enabled);
        self
    }

    /// Set the per-filename tag ceiling.
    ///
    /// Default: 100
    pub fn max_tags(mut self, max: usize) -> Self {
        self.max_tags = Some(max);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        let defaults = ParserConfig::default();
        ParserConfig {
            strip_leading_numbers: self
                .strip_leading_numbers
                .unwrap_or(defaults.strip_leading_numbers),
            filename_tags: self.filename_tags.unwrap_or(defaults.filename_tags),
            extension_tag: self.extension_tag.unwrap_or(defaults.extension_tag),
            max_tags: self.max_tags.unwrap_or(defaults.max_tags),
        }
    }
}
