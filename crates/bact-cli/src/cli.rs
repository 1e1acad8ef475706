//! CLI argument definitions for the bacteria dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bact_model::DEFAULT_DAY_COUNT;
use bact_output::SAMPLE_FILE_NAME;

#[derive(Parser)]
#[command(
    name = "bacteria-dashboard",
    version,
    about = "Bacteria dynamics dashboard - chart daily bacteria counts from Excel",
    long_about = "Chart daily bacteria counts from an Excel workbook.\n\n\
                  The first column holds the bacteria type, every other column one day.\n\
                  Also renders the study reference tables and a sample workbook."
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
    /// Read an uploaded workbook, print it and draw the grouped bar chart.
    Chart(ChartArgs),

    /// Generate a sample workbook with synthetic counts.
    Sample(SampleArgs),

    /// Print the fixed reference tables.
    Reference(ReferenceArgs),

    /// Write the whole dashboard as one HTML page.
    Page(PageArgs),
}

#[derive(Parser)]
pub struct ChartArgs {
    /// Excel workbook (.xlsx or .xls) with one row per bacteria type.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the SVG chart.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "chart.svg")]
    pub output: PathBuf,

    /// Also write the reshaped long table as CSV.
    #[arg(long = "tidy-csv", value_name = "PATH")]
    pub tidy_csv: Option<PathBuf>,

    /// Chart title.
    #[arg(long = "title")]
    pub title: Option<String>,

    /// X axis label (default: the bucket column name).
    #[arg(long = "x-label")]
    pub x_label: Option<String>,

    /// Y axis label (default: the value column name).
    #[arg(long = "y-label")]
    pub y_label: Option<String>,

    /// Legend title (default: "Bacteria type").
    #[arg(long = "legend-title")]
    pub legend_title: Option<String>,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Where to write the workbook.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = SAMPLE_FILE_NAME)]
    pub output: PathBuf,

    /// Number of day columns.
    #[arg(long = "days", default_value_t = DEFAULT_DAY_COUNT)]
    pub days: u32,

    /// Seed for reproducible output.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Bacteria type to include (repeatable; default: the five study bacteria).
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,
}

#[derive(Parser)]
pub struct ReferenceArgs {
    /// Also write the mixture chart as SVG.
    #[arg(long = "chart-output", value_name = "PATH")]
    pub chart_output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PageArgs {
    /// Workbook to show in the uploaded data section.
    #[arg(long = "upload", value_name = "FILE")]
    pub upload: Option<PathBuf>,

    /// Where to write the HTML page. The sample workbook is written next to it.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = "dashboard.html")]
    pub output: PathBuf,

    /// Seed for the sample preview.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
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
