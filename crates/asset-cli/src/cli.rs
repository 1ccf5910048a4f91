//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "asset-normalizer",
    version,
    about = "Normalize vendor inventory spreadsheets into a canonical record set",
    long_about = "Normalize heterogeneous vendor inventory CSV files.\n\n\
                  Maps arbitrary column headers onto a fixed canonical schema,\n\
                  coerces dates, numbers and support-coverage statuses, and\n\
                  reports aggregate analytics (coverage breakdowns, lifecycle\n\
                  expiry counts, completeness scores)."
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
    /// Normalize an inventory CSV file and report its analytics.
    Process(ProcessArgs),

    /// List the canonical fields and the vendor headers that map to them.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the inventory CSV file.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Use the strict support-status scheme (fail-closed: anything that is
    /// not clear evidence of coverage becomes Expired).
    #[arg(long = "strict")]
    pub strict: bool,

    /// Reference date for lifecycle expiry counts (default: today, UTC).
    #[arg(long = "now", value_name = "YYYY-MM-DD")]
    pub now: Option<chrono::NaiveDate>,

    /// Write the normalized records as CSV to this path.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Emit records and summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Skip this many records in the output (clamped to the record count).
    #[arg(long = "offset", default_value_t = 0)]
    pub offset: usize,

    /// Maximum records in the output (clamped; the summary is never paginated).
    #[arg(long = "limit")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Emit the synonym table as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
