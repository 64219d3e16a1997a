//! Clap argument definitions for the `hansard` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Number of terms listed by `hansard run` unless overridden.
pub const RUN_TOP_TERMS: usize = 15;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "hansard", version)]
#[command(about = "Legislative transcript ingestion and text summaries")]
pub struct Cli {
    /// Settings file (TOML); built-in defaults apply without it
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Input and output paths shared by ingesting commands.
#[derive(Args, Debug, Clone)]
pub struct IngestPaths {
    /// Directory containing transcript *.xml files
    pub xml_dir: PathBuf,

    /// CSV file to write
    pub output_csv: PathBuf,

    /// Abort on the first file that cannot be parsed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `hansard ingest`.
#[derive(Args, Debug, Clone)]
pub struct IngestCommand {
    #[command(flatten)]
    /// Input, output and failure handling.
    pub paths: IngestPaths,
}

/// Arguments for `hansard summary`.
#[derive(Args, Debug, Clone)]
pub struct SummaryCommand {
    /// Record CSV produced by `hansard ingest`
    pub csv: PathBuf,

    /// Number of top terms to list [default: analysis.top_terms]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `hansard run`.
#[derive(Args, Debug, Clone)]
pub struct RunCommand {
    #[command(flatten)]
    /// Input, output and failure handling.
    pub paths: IngestPaths,

    /// Number of top terms to list
    #[arg(short = 'n', long, default_value_t = RUN_TOP_TERMS)]
    pub limit: usize,
}

/// Arguments for `hansard inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Transcript XML file
    pub file: PathBuf,

    /// Number of top terms to list
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,
}

/// Supported `hansard` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a directory of transcript XML files into a record CSV
    Ingest(IngestCommand),

    /// Enrich a record CSV and print chamber statistics and top terms
    Summary(SummaryCommand),

    /// Ingest, re-read, enrich and summarize in one pass
    Run(RunCommand),

    /// Show the record built from a single file without writing anything
    Inspect(InspectCommand),

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
