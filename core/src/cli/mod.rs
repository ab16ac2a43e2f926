pub mod report;

use crate::types::{BrowserOptions, SortOrder};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for tagbrowser
#[derive(Parser, Debug)]
#[command(name = "tagbrowser")]
#[command(about = "Browse the DICOM tags of a series as a flat, filterable table")]
#[command(version)]
pub struct Cli {
    /// DICOM or naturalized JSON files; together they form one series
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Instance number to display (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub instance: usize,

    /// Only show rows whose tag, keyword or value contains this text
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Row ordering
    #[arg(short, long, default_value = "indented-tag")]
    pub sort: SortOrderArg,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print specimen descriptions instead of tags
    #[arg(long)]
    pub specimens: bool,

    /// Include stains in specimen descriptions
    #[arg(long)]
    pub show_stain: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Browser options selected on the command line
    pub fn browser_options(&self) -> BrowserOptions {
        BrowserOptions::default()
            .with_filter(&self.filter)
            .with_sort_order(self.sort.clone().into())
    }
}

/// Log level to force on the logger
///
/// `--verbose` always selects `Debug`. Otherwise `Info` is only forced when
/// `RUST_LOG` is unset, so an explicit environment filter wins.
pub fn log_level(verbose: bool, rust_log_set: bool) -> Option<log::LevelFilter> {
    if verbose {
        Some(log::LevelFilter::Debug)
    } else if rust_log_set {
        None
    } else {
        Some(log::LevelFilter::Info)
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// JSON format
    Json,
}

/// Row ordering options
#[derive(Debug, Clone, ValueEnum)]
pub enum SortOrderArg {
    /// Plain string order of the indented tag (nested rows sort last)
    IndentedTag,
    /// Hierarchical order: sequence items directly followed by their elements
    Emission,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::IndentedTag => SortOrder::IndentedTag,
            SortOrderArg::Emission => SortOrder::Emission,
        }
    }
}
