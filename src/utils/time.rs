//! Timestamp encoding: punch instants travel through the database as
//! RFC 3339 text and must reload bit-equal, UTC offset included.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Utc};

pub fn encode_timestamp(t: &DateTime<FixedOffset>) -> String {
    t.to_rfc3339()
}

pub fn parse_timestamp(s: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Current instant in UTC, encoded for the `updated_at` column.
pub fn now_utc_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
