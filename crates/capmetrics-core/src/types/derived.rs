//! Series derived from a [`PriceSeries`] by the analytics transforms.

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// One derived observation: the original price plus the derived value
/// (normalized price or period return).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Observation date.
    pub date: Date,
    /// The original price at this date.
    pub price: f64,
    /// The derived value at this date.
    pub value: f64,
}

/// Prices rebased so the earliest observation is exactly 1.0.
///
/// Points inherit the `PriceSeries` ordering invariant: ascending by date,
/// unique dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    /// Instrument name.
    pub instrument: String,
    /// Derived points, sorted ascending by date.
    pub points: Vec<SeriesPoint>,
}

/// Period-over-period simple returns; the first observation is 0.0 by
/// convention.
///
/// Returns are per consecutive sample, not per calendar period: irregular
/// sampling silently yields sample-to-sample change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    /// Instrument name.
    pub instrument: String,
    /// Derived points, sorted ascending by date.
    pub points: Vec<SeriesPoint>,
}

impl NormalizedSeries {
    /// Looks up the derived value at an exact date.
    #[must_use]
    pub fn value_on(&self, date: Date) -> Option<f64> {
        lookup(&self.points, date)
    }
}

impl ReturnSeries {
    /// Looks up the derived value at an exact date.
    #[must_use]
    pub fn value_on(&self, date: Date) -> Option<f64> {
        lookup(&self.points, date)
    }

    /// Returns the derived values in date order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

fn lookup(points: &[SeriesPoint], date: Date) -> Option<f64> {
    points
        .binary_search_by_key(&date, |p| p.date)
        .ok()
        .map(|idx| points[idx].value)
}
