//! Result and input types for CAPM calculations.

use capmetrics_core::Date;
use serde::{Deserialize, Serialize};

/// Externally supplied CAPM inputs.
///
/// Both values are configuration constants, never derived from the price
/// data; they stay explicit named inputs rather than literals buried in the
/// formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapmInputs {
    /// Risk-free rate (e.g. a 10-year treasury yield), as a fraction.
    pub risk_free: f64,
    /// Long-run market return, as a fraction.
    pub market_return: f64,
}

/// CAPM estimate for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapmResult {
    /// Instrument name.
    pub instrument: String,
    /// Beta of the instrument relative to the market.
    pub beta: f64,
    /// Expected return per the CAPM formula.
    pub expected_return: f64,
}

/// Stock and market returns restricted to their shared dates.
///
/// The three vectors are parallel: `stock[i]` and `market[i]` are the
/// returns observed on `dates[i]`. Non-empty by construction -
/// [`crate::align`] fails with `NoOverlap` instead of producing an empty
/// join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedReturns {
    /// The shared observation dates, ascending.
    pub dates: Vec<Date>,
    /// Stock returns on the shared dates.
    pub stock: Vec<f64>,
    /// Market returns on the shared dates.
    pub market: Vec<f64>,
}

impl AlignedReturns {
    /// Number of aligned observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when there are no aligned observations.
    ///
    /// Values produced by [`crate::align`] are never empty; this exists for
    /// the standard `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
