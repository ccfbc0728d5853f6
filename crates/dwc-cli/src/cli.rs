//! CLI argument definitions for the checklist mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dwc-checklist",
    version,
    about = "Map the alien mammals checklist to Darwin Core",
    long_about = "Map the checklist of alien mammals of Belgium to Darwin Core format.\n\n\
                  Reads the published checklist dump (CSV or TSV) and writes the Taxon core\n\
                  plus the Distribution, Species Profile and Description extensions, with a\n\
                  meta.xml archive descriptor."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a checklist dump and write the Darwin Core archive files.
    Map(MapArgs),

    /// List the output tables and their Darwin Core terms.
    Terms,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the checklist dump (CSV; tab-separated for .tsv/.tab files).
    #[arg(value_name = "CHECKLIST_FILE")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Force the input field delimiter instead of inferring it from the
    /// file extension.
    #[arg(long = "delimiter", value_enum)]
    pub delimiter: Option<DelimiterArg>,

    /// Run the full pipeline and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Fill an absent taxon_id_hash with a hash derived from scientific name
    /// and kingdom.
    ///
    /// By default the hash is treated as an upstream input: records without
    /// one get a taxon identifier with an empty hash segment. Use this flag
    /// when mapping a dump that predates the hash column.
    #[arg(long = "derive-taxon-hash")]
    pub derive_taxon_hash: bool,

    /// Skip the meta.xml archive descriptor.
    #[arg(long = "no-meta-xml")]
    pub no_meta_xml: bool,

    /// Skip copying the unmodified input into <output>/raw/.
    #[arg(long = "no-raw-archive")]
    pub no_raw_archive: bool,
}

/// CLI delimiter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Tab,
    Semicolon,
}

impl DelimiterArg {
    pub fn as_byte(self) -> u8 {
        match self {
            DelimiterArg::Comma => b',',
            DelimiterArg::Tab => b'\t',
            DelimiterArg::Semicolon => b';',
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
