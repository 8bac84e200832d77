//! Validated price history for a single instrument.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// A single dated price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    date: Date,
    price: f64,
}

impl PricePoint {
    /// Creates a price point, rejecting prices that cannot participate in
    /// normalization or return math.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPrice` if the price is non-finite or not
    /// strictly positive.
    pub fn new(date: Date, price: f64) -> CoreResult<Self> {
        if !price.is_finite() {
            return Err(CoreError::InvalidPrice {
                value: price,
                reason: "price must be finite".to_string(),
            });
        }
        if price <= 0.0 {
            return Err(CoreError::InvalidPrice {
                value: price,
                reason: "price must be strictly positive".to_string(),
            });
        }
        Ok(PricePoint { date, price })
    }

    /// Returns the observation date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the observed price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// An instrument's price history, sorted ascending by date with unique dates.
///
/// Both invariants are established once, at construction: points are sorted
/// by date, and when the input restates a date the last occurrence wins.
/// Transforms downstream rely on the invariants instead of re-sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    instrument: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from raw points.
    ///
    /// Points are sorted ascending by date; duplicate dates keep the last
    /// occurrence in input order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptySeries` when `points` is empty.
    pub fn new(instrument: impl Into<String>, points: Vec<PricePoint>) -> CoreResult<Self> {
        let instrument = instrument.into();
        if points.is_empty() {
            return Err(CoreError::EmptySeries { instrument });
        }

        // BTreeMap insertion both sorts and resolves duplicates to the
        // last-seen price.
        let by_date: BTreeMap<Date, f64> = points.into_iter().map(|p| (p.date, p.price)).collect();
        let points = by_date
            .into_iter()
            .map(|(date, price)| PricePoint { date, price })
            .collect();

        Ok(PriceSeries { instrument, points })
    }

    /// Returns the instrument name.
    #[must_use]
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// Returns the points, sorted ascending by date.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Returns the number of points (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the earliest point.
    #[must_use]
    pub fn first(&self) -> &PricePoint {
        // Non-empty by construction.
        &self.points[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(ymd: (i32, u32, u32), price: f64) -> PricePoint {
        PricePoint::new(Date::from_ymd(ymd.0, ymd.1, ymd.2).unwrap(), price).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let date = Date::from_ymd(2024, 1, 31).unwrap();
        assert!(matches!(
            PricePoint::new(date, 0.0),
            Err(CoreError::InvalidPrice { .. })
        ));
        assert!(matches!(
            PricePoint::new(date, -3.5),
            Err(CoreError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_price() {
        let date = Date::from_ymd(2024, 1, 31).unwrap();
        assert!(PricePoint::new(date, f64::NAN).is_err());
        assert!(PricePoint::new(date, f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let result = PriceSeries::new("AAPL", vec![]);
        assert!(matches!(result, Err(CoreError::EmptySeries { .. })));
    }

    #[test]
    fn test_sorts_ascending_by_date() {
        let series = PriceSeries::new(
            "AAPL",
            vec![
                point((2024, 3, 29), 171.48),
                point((2024, 1, 31), 184.40),
                point((2024, 2, 29), 180.75),
            ],
        )
        .unwrap();

        let dates: Vec<String> = series.points().iter().map(|p| p.date().to_string()).collect();
        assert_eq!(dates, vec!["2024-01-31", "2024-02-29", "2024-03-29"]);
        assert_eq!(series.first().price(), 184.40);
    }

    #[test]
    fn test_duplicate_dates_keep_last() {
        let series = PriceSeries::new(
            "AAPL",
            vec![
                point((2024, 1, 31), 184.40),
                point((2024, 2, 29), 179.00),
                point((2024, 2, 29), 180.75),
            ],
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[1].price(), 180.75);
    }
}
