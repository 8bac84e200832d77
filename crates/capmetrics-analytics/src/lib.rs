//! # Capmetrics Analytics
//!
//! CAPM calculations over typed price series.
//!
//! This crate provides the numerical pipeline of the workspace:
//!
//! - **Transforms**: [`normalize`] and [`monthly_returns`] over a
//!   [`capmetrics_core::PriceSeries`]
//! - **Alignment**: exact-date inner join of stock and market return series
//! - **Return Math**: [`beta`] (population covariance / variance) and the
//!   CAPM [`expected_return`] formula
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all inputs explicit, no I/O, no caching
//! - **Explicit degenerate cases**: zero market variance and an empty date
//!   intersection are typed errors, never a NaN or infinite result
//! - **Numerical convention**: covariance and variance divide by N
//!   (population form), matching the beta definition used throughout

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod align;
pub mod capm;
pub mod error;
pub mod transform;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::{align, capm_for_stock};
    pub use crate::capm::{beta, expected_return};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::transform::{monthly_returns, normalize};
    pub use crate::types::{AlignedReturns, CapmInputs, CapmResult};
}

// Re-export the operations at crate root
pub use align::{align, capm_for_stock};
pub use capm::{beta, expected_return};
pub use error::{AnalyticsError, AnalyticsResult};
pub use transform::{monthly_returns, normalize};
pub use types::{AlignedReturns, CapmInputs, CapmResult};
