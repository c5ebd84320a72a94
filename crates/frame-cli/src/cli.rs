//! CLI argument definitions for the frame transformer runner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "frame-tx",
    version,
    about = "Apply dataframe preprocessing transformers to CSV files",
    long_about = "Apply dataframe preprocessing transformers to CSV files.\n\n\
                  Date and datetime columns are detected while reading, so ISO 8601\n\
                  values can be used directly as transformer inputs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Add a column with the difference between two date columns.
    Datediff(DatediffArgs),

    /// Apply a pipeline of transformers described in a JSON file.
    Apply(ApplyArgs),

    /// List the accepted date difference units.
    Units,
}

/// Input and output locations shared by every transforming command.
#[derive(Args, Clone)]
pub struct IoArgs {
    /// CSV file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the transformed CSV (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct DatediffArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Column holding the earlier dates.
    #[arg(long = "lower", value_name = "COLUMN")]
    pub column_lower: String,

    /// Column holding the later dates.
    #[arg(long = "upper", value_name = "COLUMN")]
    pub column_upper: String,

    /// Unit of the result: D (days), h (hours), m (minutes) or s (seconds).
    #[arg(long = "units", default_value = "D")]
    pub units: String,

    /// Name of the output column (default: <UPPER>_<LOWER>_datediff_<UNITS>).
    #[arg(long = "name", value_name = "COLUMN")]
    pub new_column_name: Option<String>,

    /// Log each transformer call at info level.
    #[arg(long = "trace-transform")]
    pub trace_transform: bool,
}

#[derive(Args, Clone)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// JSON pipeline configuration.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,
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
