//! Capmetrics CLI - CAPM statistics for a spreadsheet portfolio.
//!
//! # Usage
//!
//! ```bash
//! # Full report against the default SP50 benchmark
//! capmetrics PriceHistoryCapm.xlsx
//!
//! # Different benchmark and CAPM constants, with plots
//! capmetrics prices.xlsx --market NDX --risk-free 0.042 --market-return 0.11 --plot-dir plots
//!
//! # Machine-readable summary
//! capmetrics prices.xlsx --format json
//! ```

use anyhow::Result;
use clap::Parser;

use capmetrics_analytics::CapmInputs;
use capmetrics_portfolio::{run_portfolio, RunConfig};

mod cli;
mod error;
mod plot;
mod report;
mod workbook;

use cli::Cli;
use workbook::Workbook;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the report itself goes to stdout, diagnostics to
    // stderr.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = Workbook::open(&cli.workbook)?;

    let inputs = CapmInputs {
        risk_free: cli.risk_free,
        market_return: cli.market_return,
    };
    let config = RunConfig::new(cli.market.as_str(), inputs).with_sheet_label(cli.sheet_label.as_str());

    let portfolio = run_portfolio(&source, &config)?;

    report::print_report(&portfolio, &cli.market, cli.rows, cli.format)?;

    if let Some(dir) = &cli.plot_dir {
        for stock in &portfolio.stocks {
            let path = plot::write_normalized_chart(&stock.normalized, dir)?;
            report::print_success(&format!("wrote {}", path.display()));
        }
    }

    Ok(())
}
