//! Business-day calendar and intraday hour labels.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Error, Result};

/// Number of hourly buckets in an order profile (9 AM through 3 PM).
pub const HOURLY_BUCKETS: usize = 7;

/// True for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every weekday in `start..=end`, ascending.
///
/// Holidays are not modelled; only weekends are skipped.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if start > end {
        return Err(Error::InvalidCalendar { start, end });
    }
    let days: Vec<NaiveDate> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d))
        .collect();
    if days.is_empty() {
        return Err(Error::EmptyCalendar { start, end });
    }
    Ok(days)
}

/// 12-hour clock label for an hour of the day: `9 AM`, `12 PM`, `3 PM`.
pub fn hour_label(hour: u32) -> String {
    match hour % 24 {
        0 => "12 AM".to_string(),
        h @ 1..=11 => format!("{h} AM"),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

/// Labels for `count` consecutive hourly buckets starting at `first_hour`.
pub fn hour_labels(first_hour: u32, count: usize) -> Vec<String> {
    (first_hour..).take(count).map(hour_label).collect()
}
