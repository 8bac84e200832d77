//! Error types for the core domain model.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing domain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Invalid or unparsable calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Price value that cannot participate in return math.
    #[error("Invalid price {value}: {reason}")]
    InvalidPrice {
        /// The offending price value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// A price series must contain at least one point.
    #[error("Price series for '{instrument}' has no points")]
    EmptySeries {
        /// The instrument whose series was empty.
        instrument: String,
    },
}

impl CoreError {
    /// Convenience constructor for `InvalidDate`.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        CoreError::InvalidDate {
            message: message.into(),
        }
    }
}
