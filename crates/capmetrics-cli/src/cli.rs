//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Capmetrics - CAPM statistics for a spreadsheet portfolio
///
/// Reads one "Price History <NAME>" sheet per instrument from an Excel
/// workbook, computes beta and expected return for every instrument against
/// the market benchmark, and prints a comparison report.
#[derive(Parser, Debug)]
#[command(name = "capmetrics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Excel workbook
    pub workbook: PathBuf,

    /// Market benchmark instrument name (after sheet-name derivation)
    #[arg(short, long, default_value = "SP50")]
    pub market: String,

    /// Risk-free rate as a fraction (default: 10-year treasury yield)
    #[arg(long, default_value_t = 0.0408)]
    pub risk_free: f64,

    /// Long-run market return as a fraction
    #[arg(long, default_value_t = 0.1305)]
    pub market_return: f64,

    /// Label substring stripped from sheet names to derive instrument names
    #[arg(long, default_value = "Price History")]
    pub sheet_label: String,

    /// Aligned rows shown per instrument in the detail view
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Directory for per-instrument SVG plots of normalized prices
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with per-instrument detail tables
    #[default]
    Table,
    /// JSON summary document
    Json,
    /// CSV summary rows
    Csv,
}
