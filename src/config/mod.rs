mod types;

pub use types::*;

use anyhow::{Context, Result};
use romtag_common::paths::is_known_extension;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./romtag.toml",
        "~/.config/romtag/config.toml",
        "/etc/romtag/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file: {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.parser.max_tags == 0 {
        anyhow::bail!("parser.max_tags must be greater than 0");
    }

    if !OUTPUT_FORMATS.contains(&config.output.format.as_str()) {
        anyhow::bail!(
            "Unknown output format '{}' (expected one of: {})",
            config.output.format,
            OUTPUT_FORMATS.join(", ")
        );
    }

    for ext in &config.scan.extensions {
        if !is_known_extension(ext) {
            tracing::warn!("Scan extension is not a known media type: {}", ext);
        }
    }

    Ok(())
}
