//! Utility functions for the footfall_forecast crate

use chrono::{Duration, NaiveDate};

/// Create future calendar dates for forecasting
///
/// Returns exactly `horizon` consecutive days starting the day after
/// `last`. Forecast values are aligned one-to-one with these dates.
pub fn future_dates(last: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon as i64).map(|k| last + Duration::days(k)).collect()
}

/// Date formats accepted by [`parse_flexible_date`], tried in order.
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a calendar date from a handful of common formats
///
/// ISO `YYYY-MM-DD` is tried first, then slash and dot variants and the
/// date part of an ISO datetime. Returns `None` when no format matches;
/// callers decide whether that is an error or a row to drop. Whatever the
/// input format, the result renders back as ISO.
pub fn parse_flexible_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}
