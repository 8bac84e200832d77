//! CAPM return math: beta and expected return.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::CapmInputs;

/// Computes the CAPM expected return.
///
/// `expected = rf + beta * (market_return - rf)`
///
/// Total for any finite inputs; the risk-free rate and long-run market
/// return come from [`CapmInputs`], never from the observed data.
///
/// # Example
///
/// ```rust
/// use capmetrics_analytics::{expected_return, CapmInputs};
///
/// let inputs = CapmInputs { risk_free: 0.03, market_return: 0.08 };
/// let expected = expected_return(&inputs, 1.2);
/// assert!((expected - 0.09).abs() < 1e-12);
/// ```
#[must_use]
pub fn expected_return(inputs: &CapmInputs, beta: f64) -> f64 {
    inputs.risk_free + beta * (inputs.market_return - inputs.risk_free)
}

/// Computes beta of a stock relative to the market.
///
/// `beta = cov(stock, market) / var(market)`, with the population (divide
/// by N) convention for both covariance and variance. The sequences must be
/// aligned index-for-index: same date at same index.
///
/// # Errors
///
/// - `EmptySeries` when either sequence has no observations
/// - `LengthMismatch` when the sequences differ in length
/// - `ZeroMarketVariance` when the market returns are constant - the
///   division is undefined and must not silently produce a non-finite beta
pub fn beta(stock: &[f64], market: &[f64]) -> AnalyticsResult<f64> {
    if stock.is_empty() || market.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }
    if stock.len() != market.len() {
        return Err(AnalyticsError::LengthMismatch {
            stock: stock.len(),
            market: market.len(),
        });
    }

    let n = stock.len() as f64;
    let stock_mean = stock.iter().sum::<f64>() / n;
    let market_mean = market.iter().sum::<f64>() / n;

    let market_variance = market.iter().map(|m| (m - market_mean).powi(2)).sum::<f64>() / n;

    if market_variance == 0.0 {
        return Err(AnalyticsError::ZeroMarketVariance);
    }

    let covariance = stock
        .iter()
        .zip(market.iter())
        .map(|(s, m)| (s - stock_mean) * (m - market_mean))
        .sum::<f64>()
        / n;

    Ok(covariance / market_variance)
}
