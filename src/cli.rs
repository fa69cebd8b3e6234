use romtag::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "romtag")]
#[command(author, version, about = "Retro media filename tagger")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print canonical tags for one or more filenames
    Tags {
        /// Filenames to parse
        #[arg(required = true)]
        names: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the display title for one or more filenames
    Title {
        /// Filenames to clean
        #[arg(required = true)]
        names: Vec<String>,

        /// Strip list-style leading numbers ("01 - ")
        #[arg(long)]
        strip_leading_numbers: bool,
    },

    /// Scan a directory and print fragments for each media file
    Scan {
        /// Directory to scan
        #[arg(required = true)]
        dir: PathBuf,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the canonical tag vocabulary
    Vocab {
        /// Only show tags of this type (region, lang, dump, ...)
        #[arg(short = 't', long = "type")]
        tag_type: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
