//! The single-pass portfolio driver.
//!
//! Load, clean, transform the market once, then transform and align every
//! instrument against it. Per-instrument failures become skip records; only
//! a missing market aborts the run.

use std::collections::BTreeSet;

use capmetrics_analytics::{capm_for_stock, monthly_returns, normalize, CapmInputs};
use capmetrics_core::{PricePoint, PriceSeries};
use tracing::{debug, info, warn};

use crate::error::{PortfolioError, PortfolioResult};
use crate::report::{AlignedRow, PortfolioReport, SkippedInstrument, StockReport};
use crate::source::{instrument_from_sheet, PriceSource};

/// Default label substring stripped from sheet names.
pub const DEFAULT_SHEET_LABEL: &str = "Price History";

/// Configuration for one portfolio pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Instrument name of the market benchmark (after sheet-name
    /// derivation), e.g. `"SP50"`.
    pub market: String,
    /// Label substring stripped from sheet names to derive instrument
    /// names.
    pub sheet_label: String,
    /// Risk-free rate and long-run market return for the CAPM formula.
    pub inputs: CapmInputs,
}

impl RunConfig {
    /// Creates a config with the default sheet label.
    pub fn new(market: impl Into<String>, inputs: CapmInputs) -> Self {
        RunConfig {
            market: market.into(),
            sheet_label: DEFAULT_SHEET_LABEL.to_string(),
            inputs,
        }
    }

    /// Overrides the sheet label substring.
    #[must_use]
    pub fn with_sheet_label(mut self, label: impl Into<String>) -> Self {
        self.sheet_label = label.into();
        self
    }
}

/// An instrument after the Clean step.
struct Cleaned {
    instrument: String,
    series: Option<PriceSeries>,
    dropped: usize,
}

/// Runs one portfolio pass over the source.
///
/// Every sheet is cleaned; the market instrument is transformed once and
/// its return series reused for every alignment. All instruments - the
/// market included - appear either in `stocks` or in `skipped`, in sheet
/// order.
///
/// # Errors
///
/// - `PortfolioError::Source` when a sheet cannot be read
/// - `PortfolioError::MissingMarket` when the configured market instrument
///   is absent or cleaned down to zero rows
pub fn run_portfolio(
    source: &dyn PriceSource,
    config: &RunConfig,
) -> PortfolioResult<PortfolioReport> {
    // Load + Clean
    let mut cleaned = Vec::new();
    for sheet in source.sheet_names() {
        let rows = source.rows(&sheet)?;
        let instrument = instrument_from_sheet(&sheet, &config.sheet_label);
        cleaned.push(clean(instrument, &rows));
    }

    // Transform the market once; its return series is shared by every
    // alignment below.
    let market_series = cleaned
        .iter()
        .find(|c| c.instrument == config.market)
        .and_then(|c| c.series.as_ref())
        .ok_or_else(|| PortfolioError::MissingMarket {
            market: config.market.clone(),
        })?;
    let market_returns = monthly_returns(market_series);

    // Transform & align each instrument, market included.
    let mut stocks = Vec::new();
    let mut skipped = Vec::new();

    for entry in &cleaned {
        let Some(series) = &entry.series else {
            warn!(
                instrument = %entry.instrument,
                "skipping instrument: no valid rows after cleaning"
            );
            skipped.push(SkippedInstrument {
                instrument: entry.instrument.clone(),
                reason: "no valid rows after cleaning".to_string(),
            });
            continue;
        };

        let normalized = normalize(series);
        let returns = monthly_returns(series);

        match capm_for_stock(&returns, &market_returns, &config.inputs) {
            Ok((aligned, result)) => {
                debug!(
                    instrument = %result.instrument,
                    beta = result.beta,
                    pairs = aligned.len(),
                    "instrument processed"
                );

                let shared: BTreeSet<_> = aligned.dates.iter().copied().collect();
                let mut rows = Vec::with_capacity(aligned.len());
                for (ret_point, norm_point) in returns.points.iter().zip(&normalized.points) {
                    if !shared.contains(&ret_point.date) {
                        continue;
                    }
                    if let Some(market_return) = market_returns.value_on(ret_point.date) {
                        rows.push(AlignedRow {
                            date: ret_point.date,
                            price: ret_point.price,
                            normalized: norm_point.value,
                            stock_return: ret_point.value,
                            market_return,
                        });
                    }
                }

                stocks.push(StockReport {
                    normalized,
                    returns,
                    aligned: rows,
                    result,
                    dropped_rows: entry.dropped,
                });
            }
            Err(err) => {
                warn!(instrument = %entry.instrument, %err, "skipping instrument");
                skipped.push(SkippedInstrument {
                    instrument: entry.instrument.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(
        processed = stocks.len(),
        skipped = skipped.len(),
        "portfolio pass complete"
    );

    Ok(PortfolioReport { stocks, skipped })
}

/// The Clean step for one instrument: drop rows whose date or price did not
/// decode (or whose price cannot participate in return math), and count
/// them.
fn clean(instrument: String, rows: &[crate::source::RawRow]) -> Cleaned {
    let mut points = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        let (Some(date), Some(price)) = (row.date, row.price) else {
            dropped += 1;
            continue;
        };
        match PricePoint::new(date, price) {
            Ok(point) => points.push(point),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(instrument = %instrument, dropped, "dropped unparsable rows");
    }

    let series = PriceSeries::new(instrument.clone(), points).ok();

    Cleaned {
        instrument,
        series,
        dropped,
    }
}
