//! Date type for time series keys.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date keying one observation in a price series.
///
/// This is a newtype wrapper around `chrono::NaiveDate` so that series code
/// cannot accidentally mix dates with other integral keys, and so that
/// parsing failures surface as [`CoreError::InvalidDate`] instead of a bare
/// chrono error.
///
/// # Example
///
/// ```rust
/// use capmetrics_core::types::Date;
///
/// let date = Date::parse("2024-06-28").unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn test_from_ymd_invalid() {
        let result = Date::from_ymd(2023, 2, 29);
        assert!(matches!(result, Err(CoreError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_iso() {
        let date = Date::parse("2024-01-31").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("2024-13-01").is_err());
    }

    #[test]
    fn test_ordering() {
        let jan = Date::from_ymd(2024, 1, 31).unwrap();
        let feb = Date::from_ymd(2024, 2, 29).unwrap();
        assert!(jan < feb);
    }

    #[test]
    fn test_days_between() {
        let start = Date::from_ymd(2024, 1, 31).unwrap();
        let end = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(start.days_between(&end), 29);
        assert_eq!(end.days_between(&start), -29);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2024, 3, 5).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-03-05\"");
    }
}
