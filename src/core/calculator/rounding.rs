//! Snap instants to the configured rounding interval.

use chrono::{DateTime, FixedOffset, TimeZone};

/// Round `t` to the nearest multiple of `minutes`, keeping its UTC offset.
///
/// The ratio of epoch milliseconds to the interval is rounded half-up, so an
/// instant sitting exactly on a midpoint moves forward: 09:07:30 at a
/// 15-minute interval becomes 09:15. `minutes == 0` disables rounding.
pub fn round_to_nearest_minutes(t: DateTime<FixedOffset>, minutes: u32) -> DateTime<FixedOffset> {
    if minutes == 0 {
        return t;
    }

    let interval_ms = i64::from(minutes) * 60_000;
    let rounded_ms =
        (t.timestamp_millis() as f64 / interval_ms as f64).round() as i64 * interval_ms;

    t.offset()
        .timestamp_millis_opt(rounded_ms)
        .single()
        .unwrap_or(t)
}
