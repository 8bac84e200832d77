//! Error types for CAPM calculations.

use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during CAPM calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A return sequence with no observations.
    #[error("Return series has no observations")]
    EmptySeries,

    /// Stock and market return sequences must be aligned index-for-index.
    #[error("Return series length mismatch: {stock} stock vs {market} market")]
    LengthMismatch {
        /// Number of stock observations.
        stock: usize,
        /// Number of market observations.
        market: usize,
    },

    /// Market returns have zero variance, so beta is undefined.
    #[error("Market returns have zero variance: beta is undefined")]
    ZeroMarketVariance,

    /// No dates shared between a stock and the market series.
    #[error("No overlapping dates between '{instrument}' and the market series")]
    NoOverlap {
        /// The stock instrument that shares no dates with the market.
        instrument: String,
    },
}
