//! Rendering of parse and scan results.

use crate::scanner::ScanEntry;
use anyhow::{bail, Result};
use romtag_parser::CanonicalTag;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

/// Output format for the `tags` and `scan` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// A single JSON document
    Json,
    /// One JSON object per line
    Jsonl,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "jsonl" => Ok(Self::Jsonl),
            other => bail!("unknown output format: {}", other),
        }
    }
}

/// Tags and title parsed from one filename.
#[derive(Debug, Serialize)]
pub struct TagReport<'a> {
    pub input: &'a str,
    pub title: String,
    pub tags: Vec<CanonicalTag>,
}

/// Write tag reports in the given format.
pub fn write_tag_reports<W: Write>(
    out: &mut W,
    reports: &[TagReport<'_>],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}", report.input)?;
                writeln!(out, "  title: {}", report.title)?;
                for tag in &report.tags {
                    writeln!(out, "  {}", tag)?;
                }
            }
        }
        OutputFormat::Json => write_json(out, reports, pretty)?,
        OutputFormat::Jsonl => {
            for report in reports {
                serde_json::to_writer(&mut *out, report)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Write scan entries in the given format.
pub fn write_scan_entries<W: Write>(
    out: &mut W,
    entries: &[ScanEntry],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                let f = &entry.fragments;
                writeln!(out, "{}\t{}\t{}", f.path, f.title, f.tags.join(" "))?;
            }
        }
        OutputFormat::Json => write_json(out, entries, pretty)?,
        OutputFormat::Jsonl => {
            for entry in entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use romtag_parser::{path_fragments, ParserConfig};

    fn report(input: &str) -> TagReport<'_> {
        TagReport {
            input,
            title: romtag_parser::extract_title(input, false),
            tags: romtag_parser::parse_filename(input),
        }
    }

    fn render_tags(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        let reports = [report("Zelda (USA).nes"), report("Tetris (Japan).gb")];
        write_tag_reports(&mut buf, &reports, format, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_tags() {
        let text = render_tags(OutputFormat::Text);
        assert!(text.contains("Zelda (USA).nes\n  title: Zelda\n  region:us\n"));
        assert!(text.contains("  region:jp\n"));
    }

    #[test]
    fn test_json_tags() {
        let text = render_tags(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["title"], "Zelda");
        assert_eq!(value[1]["tags"][0]["value"], "jp");
    }

    #[test]
    fn test_jsonl_tags() {
        let text = render_tags(OutputFormat::Jsonl);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_text_scan_entries() {
        let entry = ScanEntry {
            fragments: path_fragments("/roms/Contra (USA).nes", &ParserConfig::default()),
            kind: None,
        };
        let mut buf = Vec::new();
        write_scan_entries(&mut buf, &[entry], OutputFormat::Text, false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "/roms/Contra (USA).nes\tContra\tregion:us extension:nes\n"
        );
    }
}
