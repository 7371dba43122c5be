//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hds",
    version,
    about = "Normalize health datasets into a canonical silver schema and merge them into gold",
    long_about = "Normalize heterogeneous health datasets into one canonical schema.\n\n\
                  `silver` converts one registered dataset, `gold` merges every silver\n\
                  table into a single model-ready parquet file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding registry.yaml and criteria.yaml.
    #[arg(long = "config-dir", value_name = "DIR", default_value = "config", global = true)]
    pub config_dir: PathBuf,

    /// Root of the silver/ and gold/ output directories.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
    /// Build the silver parquet file for one registered dataset.
    Silver(SilverArgs),

    /// Merge all silver files into data/gold/diabetes_ml.parquet.
    Gold,

    /// List registered datasets.
    Datasets,

    /// Print shape and first rows of every silver file.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct SilverArgs {
    /// Dataset key from registry.yaml.
    #[arg(value_name = "DATASET")]
    pub dataset: String,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Number of rows to show per file.
    #[arg(long = "rows", short = 'n', default_value_t = 5)]
    pub rows: usize,
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
