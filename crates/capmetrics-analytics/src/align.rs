//! Date alignment of stock and market return series.

use capmetrics_core::ReturnSeries;

use crate::capm::{beta, expected_return};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::{AlignedReturns, CapmInputs, CapmResult};

/// Inner-joins a stock return series with the market return series on exact
/// date equality.
///
/// Only dates present in both series contribute; there is no tolerance
/// window. The result stays in ascending date order.
///
/// # Errors
///
/// Returns `NoOverlap` when the two series share no dates - beta cannot be
/// estimated from zero aligned pairs.
pub fn align(stock: &ReturnSeries, market: &ReturnSeries) -> AnalyticsResult<AlignedReturns> {
    let mut dates = Vec::new();
    let mut stock_returns = Vec::new();
    let mut market_returns = Vec::new();

    for point in &stock.points {
        if let Some(market_value) = market.value_on(point.date) {
            dates.push(point.date);
            stock_returns.push(point.value);
            market_returns.push(market_value);
        }
    }

    if dates.is_empty() {
        return Err(AnalyticsError::NoOverlap {
            instrument: stock.instrument.clone(),
        });
    }

    Ok(AlignedReturns {
        dates,
        stock: stock_returns,
        market: market_returns,
    })
}

/// Aligns a stock against the market and computes its CAPM estimate.
///
/// The risk-free rate and long-run market return come from `inputs`; only
/// beta is estimated from the observed returns.
///
/// # Errors
///
/// Propagates `NoOverlap` from [`align`] and `ZeroMarketVariance` from
/// [`beta`].
pub fn capm_for_stock(
    stock: &ReturnSeries,
    market: &ReturnSeries,
    inputs: &CapmInputs,
) -> AnalyticsResult<(AlignedReturns, CapmResult)> {
    let aligned = align(stock, market)?;

    let beta = beta(&aligned.stock, &aligned.market)?;
    let expected_return = expected_return(inputs, beta);

    let result = CapmResult {
        instrument: stock.instrument.clone(),
        beta,
        expected_return,
    };

    Ok((aligned, result))
}
