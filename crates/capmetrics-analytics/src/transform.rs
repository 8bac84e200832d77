//! Series transforms: normalization and period returns.
//!
//! Both transforms are total: a [`PriceSeries`] is non-empty and sorted
//! ascending with unique dates by construction, so there is no empty or
//! unsorted case left to fail on here.

use capmetrics_core::{NormalizedSeries, PriceSeries, ReturnSeries, SeriesPoint};

/// Rebases a price series so the earliest observation is exactly 1.0.
///
/// Every price is divided by the first (earliest-date) price. The input is
/// left untouched; the result is a new derived series.
#[must_use]
pub fn normalize(series: &PriceSeries) -> NormalizedSeries {
    let initial = series.first().price();

    let points = series
        .points()
        .iter()
        .map(|p| SeriesPoint {
            date: p.date(),
            price: p.price(),
            value: p.price() / initial,
        })
        .collect();

    NormalizedSeries {
        instrument: series.instrument().to_string(),
        points,
    }
}

/// Computes period-over-period simple returns.
///
/// The first observation's return is 0.0 by convention (there is no prior
/// period to compare against). Each subsequent return is the percentage
/// change from the immediately preceding point:
/// `(price[i] - price[i-1]) / price[i-1]`.
///
/// The change is per consecutive sample - with irregular sampling this is
/// sample-to-sample change, not calendar-month change.
#[must_use]
pub fn monthly_returns(series: &PriceSeries) -> ReturnSeries {
    let mut points = Vec::with_capacity(series.len());
    let mut previous: Option<f64> = None;

    for p in series.points() {
        let value = match previous {
            Some(prev) => (p.price() - prev) / prev,
            None => 0.0,
        };
        points.push(SeriesPoint {
            date: p.date(),
            price: p.price(),
            value,
        });
        previous = Some(p.price());
    }

    ReturnSeries {
        instrument: series.instrument().to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use capmetrics_core::{Date, PricePoint};
    use proptest::prelude::*;

    fn month_end_series(prices: &[f64]) -> PriceSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let date = Date::from_ymd(2023, i as u32 + 1, 28).unwrap();
                PricePoint::new(date, price).unwrap()
            })
            .collect();
        PriceSeries::new("TEST", points).unwrap()
    }

    #[test]
    fn test_normalize_first_value_is_one() {
        let series = month_end_series(&[100.0, 105.0, 102.0, 108.0, 110.0]);

        let normalized = normalize(&series);

        assert_relative_eq!(normalized.points[0].value, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_normalize_scales_by_initial_price() {
        let series = month_end_series(&[100.0, 105.0, 102.0, 108.0, 110.0]);

        let normalized = normalize(&series);

        assert_relative_eq!(normalized.points[1].value, 1.05, epsilon = 1e-12);
        assert_relative_eq!(normalized.points[4].value, 1.10, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_preserves_input() {
        let series = month_end_series(&[100.0, 105.0]);
        let before = series.clone();

        let _ = normalize(&series);

        assert_eq!(series, before);
    }

    #[test]
    fn test_monthly_returns_first_value_is_zero() {
        let series = month_end_series(&[100.0, 105.0, 102.0]);

        let returns = monthly_returns(&series);

        assert_relative_eq!(returns.points[0].value, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_monthly_returns_scenario() {
        let series = month_end_series(&[100.0, 105.0, 102.0, 108.0, 110.0]);

        let returns = monthly_returns(&series);

        assert_relative_eq!(returns.points[1].value, 0.05, epsilon = 1e-12);
        assert_relative_eq!(returns.points[2].value, -3.0 / 105.0, epsilon = 1e-12);
        assert_relative_eq!(returns.points[3].value, 6.0 / 102.0, epsilon = 1e-12);
        assert_relative_eq!(returns.points[4].value, 2.0 / 108.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_series() {
        let series = month_end_series(&[42.0]);

        let normalized = normalize(&series);
        let returns = monthly_returns(&series);

        assert_relative_eq!(normalized.points[0].value, 1.0, epsilon = 1e-15);
        assert_relative_eq!(returns.points[0].value, 0.0, epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn prop_normalize_round_trips(
            prices in proptest::collection::vec(0.01f64..10_000.0, 1..12)
        ) {
            let series = month_end_series(&prices);
            let normalized = normalize(&series);
            let initial = series.first().price();

            for (point, original) in normalized.points.iter().zip(series.points()) {
                let reconstructed = point.value * initial;
                prop_assert!((reconstructed - original.price()).abs() <= 1e-9 * original.price());
            }
        }

        #[test]
        fn prop_normalize_starts_at_one(
            prices in proptest::collection::vec(0.01f64..10_000.0, 1..12)
        ) {
            let series = month_end_series(&prices);
            prop_assert!((normalize(&series).points[0].value - 1.0).abs() < 1e-15);
        }
    }
}
