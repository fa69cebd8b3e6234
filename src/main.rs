mod cli;

use romtag::{
    config,
    output::{self, OutputFormat, TagReport},
    scanner::Scanner,
};
use romtag_parser::{vocabulary, Parser as TagParser, ParserConfig, TagType};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::io::Write;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "romtag=trace,romtag_parser=trace,romtag_common=debug".to_string()
        } else {
            "romtag=info,romtag_parser=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Tags { names, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            print_tags(&names, &config.parser, json)
        }
        Commands::Title {
            names,
            strip_leading_numbers,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            print_titles(&names, &config.parser, strip_leading_numbers)
        }
        Commands::Scan { dir, format } => scan(&dir, format, cli.config.as_deref()),
        Commands::Vocab { tag_type } => print_vocabulary(tag_type.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("romtag {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn print_tags(names: &[String], settings: &config::ParserSettings, json: bool) -> Result<()> {
    let strip = settings.strips_leading_numbers(names);
    let parser_config = ParserConfig {
        strip_leading_numbers: strip,
        ..settings.parser_config()
    };
    let parser = TagParser::new(parser_config);
    let reports: Vec<TagReport<'_>> = names
        .iter()
        .map(|name| TagReport {
            input: name,
            title: parser.title(name),
            tags: parser.parse(name),
        })
        .collect();

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut stdout = std::io::stdout().lock();
    output::write_tag_reports(&mut stdout, &reports, format, true)?;
    stdout.flush()?;
    Ok(())
}

fn print_titles(
    names: &[String],
    settings: &config::ParserSettings,
    strip_leading_numbers: bool,
) -> Result<()> {
    let strip = strip_leading_numbers || settings.strips_leading_numbers(names);

    let mut stdout = std::io::stdout().lock();
    for name in names {
        writeln!(stdout, "{}", romtag_parser::extract_title(name, strip))?;
    }
    Ok(())
}

fn scan(dir: &Path, format: Option<OutputFormat>, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let format = match format {
        Some(format) => format,
        None => config.output.format.parse()?,
    };
    let pretty = config.output.pretty;

    let report = Scanner::new(config)
        .scan(dir)
        .with_context(|| format!("Failed to scan {:?}", dir))?;

    let mut stdout = std::io::stdout().lock();
    output::write_scan_entries(&mut stdout, &report.entries, format, pretty)?;
    stdout.flush()?;
    Ok(())
}

fn print_vocabulary(tag_type: Option<&str>) -> Result<()> {
    let wanted: Option<TagType> = tag_type.map(str::parse::<TagType>).transpose()?;

    let mut stdout = std::io::stdout().lock();
    for tag in vocabulary::canonical_tags()
        .into_iter()
        .filter(|tag| wanted.map_or(true, |t| tag.tag_type == t))
    {
        writeln!(stdout, "{}", tag)?;
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Max tags: {}", config.parser.max_tags);
            println!(
                "  Leading numbers: {}",
                if config.parser.strip_leading_numbers {
                    "strip"
                } else if config.parser.auto_detect_numbering {
                    "auto-detect"
                } else {
                    "keep"
                }
            );
            println!("  Extensions: {}", config.scan.extensions.len());
            println!("  Output format: {}", config.output.format);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Max tags: {}", config.parser.max_tags);
            println!("  Output format: {}", config.output.format);
        }
    }

    Ok(())
}
