//! The report model produced by a portfolio run.

use capmetrics_analytics::CapmResult;
use capmetrics_core::{Date, NormalizedSeries, ReturnSeries};
use serde::{Deserialize, Serialize};

/// One aligned observation for the per-stock detail view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    /// Shared observation date.
    pub date: Date,
    /// Stock price at the date.
    pub price: f64,
    /// Stock normalized price at the date.
    pub normalized: f64,
    /// Stock period return at the date.
    pub stock_return: f64,
    /// Market period return at the date.
    pub market_return: f64,
}

/// Everything computed for one successfully processed instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReport {
    /// The normalized price series (plot input).
    pub normalized: NormalizedSeries,
    /// The period return series.
    pub returns: ReturnSeries,
    /// Aligned rows, ascending by date, never empty.
    pub aligned: Vec<AlignedRow>,
    /// The CAPM estimate.
    pub result: CapmResult,
    /// Rows dropped by the Clean step for this instrument.
    pub dropped_rows: usize,
}

impl StockReport {
    /// The instrument name.
    #[must_use]
    pub fn instrument(&self) -> &str {
        &self.result.instrument
    }
}

/// An instrument that failed Clean or Align, with the reason.
///
/// Skips are carried into the final report rather than silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedInstrument {
    /// The instrument name.
    pub instrument: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Outcome of one portfolio pass, in input (sheet) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Successfully processed instruments.
    pub stocks: Vec<StockReport>,
    /// Instruments skipped with their reasons.
    pub skipped: Vec<SkippedInstrument>,
}

impl PortfolioReport {
    /// The final comparison summary: one CAPM result per processed stock.
    #[must_use]
    pub fn summary(&self) -> Vec<&CapmResult> {
        self.stocks.iter().map(|s| &s.result).collect()
    }
}
