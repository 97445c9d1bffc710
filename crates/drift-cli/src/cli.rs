//! CLI argument definitions for the drift monitor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use drift_model::ValueCountLayout;

#[derive(Parser)]
#[command(
    name = "drift-monitor",
    version,
    about = "Tabular drift monitor - compare baseline and sample model inputs",
    long_about = "Validate drift monitoring jobs and compare categorical value counts\n\
                  between a baseline dataset and a sample (production) dataset.\n\n\
                  Statistical drift tests are computed by the host platform's detector."
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
    /// Validate a job description and show the derived column roles.
    Validate(ValidateArgs),

    /// Compare categorical value counts between baseline and sample CSV files.
    ValueCounts(ValueCountsArgs),

    /// List the drift tests requested from the detector.
    Tests,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the job description JSON.
    #[arg(value_name = "JOB")]
    pub job: PathBuf,

    /// Accept declared data classes that contradict the field type.
    #[arg(long = "no-check-schema")]
    pub no_check_schema: bool,
}

#[derive(Parser)]
pub struct ValueCountsArgs {
    /// Path to the job description JSON.
    #[arg(value_name = "JOB")]
    pub job: PathBuf,

    /// Baseline dataset (CSV with a header row).
    #[arg(value_name = "BASELINE")]
    pub baseline: PathBuf,

    /// Sample dataset (CSV with a header row).
    #[arg(value_name = "SAMPLE")]
    pub sample: PathBuf,

    /// How value counts are laid out in the JSON output.
    #[arg(long = "layout", value_enum, default_value = "combined")]
    pub layout: LayoutArg,

    /// Print the metrics fragment as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Accept declared data classes that contradict the field type.
    #[arg(long = "no-check-schema")]
    pub no_check_schema: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Combined,
    PerFeature,
    Both,
}

impl From<LayoutArg> for ValueCountLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Combined => ValueCountLayout::Combined,
            LayoutArg::PerFeature => ValueCountLayout::PerFeature,
            LayoutArg::Both => ValueCountLayout::Both,
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
