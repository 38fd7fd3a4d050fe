//! CLI argument definitions for the Moviz pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "moviz",
    version,
    about = "Moviz - Normalize and merge movie catalogs into relational tables",
    long_about = "Clean, deduplicate and cross-match the TMDB, IMDb-genres and \
                  production-budget catalogs.\n\n\
                  Produces movies.csv, genres.csv and movie_genres.csv."
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
    /// Process a data folder and generate the relational tables.
    Process(ProcessArgs),

    /// List the expected source datasets and their columns.
    Datasets,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the data folder containing tmdb_movies/, genres/ and budgets/.
    #[arg(value_name = "DATA_FOLDER")]
    pub data_folder: PathBuf,

    /// Output directory for the tables (default: <DATA_FOLDER>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run the pipeline and report without writing any tables.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Override the TMDB snapshot folder.
    #[arg(long = "tmdb-dir", value_name = "DIR")]
    pub tmdb_dir: Option<PathBuf>,

    /// Override the genres catalog folder.
    #[arg(long = "genres-dir", value_name = "DIR")]
    pub genres_dir: Option<PathBuf>,

    /// Override the production-budgets folder.
    #[arg(long = "budgets-dir", value_name = "DIR")]
    pub budgets_dir: Option<PathBuf>,
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
