//! CLI argument definitions for the stock sheet processor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use stock_model::{NullCategoryMode, SortMode};
use stock_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "stock-sheet",
    version,
    about = "Stock sheet processor - classify, filter and sort monthly stock exports",
    long_about = "Classify stock items by prefix tag, filter by category and sort.\n\n\
                  Reads xlsx/xls/ods workbooks or CSV exports and writes a flat CSV\n\
                  plus a workbook with one sheet per category."
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify, filter and sort a stock sheet and write the downloads.
    Process(ProcessArgs),

    /// List the categories found in a stock sheet.
    Categories(CategoriesArgs),

    /// Diagnose a CSV file that fails to load.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Stock sheet to process (.xlsx, .xls, .ods or .csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Category to keep; repeat for several (default: every category).
    #[arg(long = "category", value_name = "VALUE")]
    pub categories: Vec<String>,

    /// Output files to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Row ordering after classification (overrides the config file).
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortArg>,

    /// Handling of rows with no category (overrides the config file).
    #[arg(long = "null-category", value_enum)]
    pub null_category: Option<NullCategoryArg>,

    /// JSON file with processing options.
    #[arg(long = "config", value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Number of processed rows shown in the preview table.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 20)]
    pub preview_rows: usize,

    /// Run the pipeline and print the results without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Stock sheet to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Xlsx,
    Both,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Csv => Self::Csv,
            OutputFormatArg::Xlsx => Self::Xlsx,
            OutputFormatArg::Both => Self::Both,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Prefix,
    PrefixThenBaseItem,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Prefix => Self::Prefix,
            SortArg::PrefixThenBaseItem => Self::PrefixThenBaseItem,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NullCategoryArg {
    Exclude,
    Include,
}

impl From<NullCategoryArg> for NullCategoryMode {
    fn from(arg: NullCategoryArg) -> Self {
        match arg {
            NullCategoryArg::Exclude => Self::Exclude,
            NullCategoryArg::Include => Self::Include,
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
