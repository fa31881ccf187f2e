//! Date utilities: Monday-aligned week arithmetic and day/week query bounds.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Weekday};

/// Monday-aligned start of the week containing `date`.
///
/// Computed as `date - ((7 + (weekday - Monday)) mod 7)` days. Week grouping
/// of punches depends on this being Monday-first, so no library
/// "start of week" helper is used here.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let diff = (7 + date.weekday().days_since(Weekday::Mon)) % 7;
    date - Duration::days(diff as i64)
}

/// Midnight at the start of `date`, tagged with `offset`.
pub fn start_of_day(date: NaiveDate, offset: FixedOffset) -> AppResult<DateTime<FixedOffset>> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    offset
        .from_local_datetime(&midnight)
        .single()
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))
}

/// Half-open `[start, end)` bounds of the calendar day containing `at`,
/// in `at`'s own UTC offset.
pub fn day_bounds(
    at: DateTime<FixedOffset>,
) -> AppResult<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let start = start_of_day(at.date_naive(), *at.offset())?;
    Ok((start, start + Duration::days(1)))
}

/// Half-open `[week_start, week_start + 7 days)` bounds of the payroll week
/// containing `at`, in `at`'s own UTC offset.
pub fn week_bounds(
    at: DateTime<FixedOffset>,
) -> AppResult<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let start = start_of_day(week_start(at.date_naive()), *at.offset())?;
    Ok((start, start + Duration::days(7)))
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
