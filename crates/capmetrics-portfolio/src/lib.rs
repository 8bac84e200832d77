//! # Capmetrics Portfolio
//!
//! The portfolio driver: one synchronous pass from raw spreadsheet rows to
//! per-stock CAPM results.
//!
//! - **[`source`]**: the [`PriceSource`] abstraction over the workbook, plus
//!   sheet-name to instrument-name derivation
//! - **[`driver`]**: the load / clean / transform / align / collect pipeline
//! - **[`report`]**: the report model consumed by the CLI renderer
//!
//! ## Design Philosophy
//!
//! - **Explicit loading**: the price source is a parameter of the run, not
//!   ambient state, so tests inject in-memory fixtures
//! - **Partial failure**: an instrument that cannot be cleaned or aligned is
//!   recorded as skipped with its reason; the run continues
//! - **One fatal case**: a missing (or unusable) market instrument aborts
//!   the run - without it there is no comparison baseline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod driver;
pub mod error;
pub mod report;
pub mod source;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::driver::{run_portfolio, RunConfig};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::report::{AlignedRow, PortfolioReport, SkippedInstrument, StockReport};
    pub use crate::source::{instrument_from_sheet, PriceSource, RawRow};
}

// Re-export commonly used items at crate root
pub use driver::{run_portfolio, RunConfig};
pub use error::{PortfolioError, PortfolioResult};
pub use report::{AlignedRow, PortfolioReport, SkippedInstrument, StockReport};
pub use source::{instrument_from_sheet, PriceSource, RawRow};
