//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "salesqa",
    version,
    about = "Data-quality checks for tabular sales data",
    long_about = "Run named validation rules against a sales CSV export.\n\n\
                  Rules cover blank fields, numeric ranges, allowed values,\n\
                  date and text formats, duplicate keys, and price*quantity\n\
                  consistency. Results are printed as a table and can be\n\
                  exported as JSON and CSV reports."
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
    /// Validate a CSV file against a rule set.
    Check(CheckArgs),

    /// Print a per-column overview (blank and distinct counts) of a CSV file.
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV file to validate.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// JSON rule-set file. Without it the built-in sales rule set is used.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Directory for report files (default: <CSV_FILE dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report files to write.
    #[arg(long = "report", value_enum, default_value = "both")]
    pub report: ReportFormatArg,

    /// Exit with status 1 when any rule fails.
    #[arg(long = "fail-on-violations")]
    pub fail_on_violations: bool,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Path to the CSV file to profile.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Json,
    Csv,
    Both,
    None,
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
