//! Domain types for price history analytics.
//!
//! - [`Date`]: calendar date for time series keys
//! - [`PricePoint`] / [`PriceSeries`]: validated per-instrument price history
//! - [`NormalizedSeries`] / [`ReturnSeries`]: derived series with one value
//!   per retained price point

mod date;
mod derived;
mod series;

// Re-export all types
pub use date::Date;
pub use derived::{NormalizedSeries, ReturnSeries, SeriesPoint};
pub use series::{PricePoint, PriceSeries};
