//! Error types for the portfolio driver.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that abort a portfolio run.
///
/// Per-instrument failures never appear here - they are recorded as
/// [`crate::report::SkippedInstrument`] entries and the run continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// The designated market instrument is absent or has no usable rows.
    /// Fatal: without it there is no comparison baseline.
    #[error("Market instrument '{market}' is missing or has no usable rows")]
    MissingMarket {
        /// The configured market instrument name.
        market: String,
    },

    /// The price source failed while reading a sheet.
    #[error("Price source failed on sheet '{sheet}': {reason}")]
    Source {
        /// The sheet being read.
        sheet: String,
        /// Description of the failure.
        reason: String,
    },
}
