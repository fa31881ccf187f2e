//! Storage layer: the capability traits plus SQLite-backed and in-memory
//! implementations. Both backends satisfy the same ordering and upsert
//! contracts, so services are written against the traits only.

pub mod initialize;
pub mod memory;
pub mod punches;
pub mod timesheets;

use crate::errors::AppResult;
use crate::models::punch::Punch;
use crate::models::timesheet::TimesheetStatus;
use crate::utils::date;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// Append-only store of clock events. Write-once, read-many: no update or
/// delete operation exists.
pub trait PunchLedger {
    /// Unconditional durable write.
    fn append(&self, punch: &Punch) -> AppResult<()>;

    /// Punches for `employee_id` with `timestamp ∈ [start, end)`, ascending
    /// by timestamp. Punches sharing a timestamp keep insertion order.
    /// Returns an empty vec (not an error) when none exist.
    fn query_range(
        &self,
        employee_id: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> AppResult<Vec<Punch>>;

    /// Day slice: the range `[start_of_day, +1 day)` of the calendar day
    /// containing `at`, taken in `at`'s own UTC offset.
    fn query_day(&self, employee_id: &str, at: DateTime<FixedOffset>) -> AppResult<Vec<Punch>> {
        let (start, end) = date::day_bounds(at)?;
        self.query_range(employee_id, start, end)
    }
}

/// Approval state keyed by (employee, Monday-aligned week start). Upsert
/// semantics, last write wins; a missing row reads as Draft with no note.
pub trait TimesheetStore {
    fn get_status(&self, employee_id: &str, week_start: NaiveDate) -> AppResult<TimesheetStatus>;

    fn get_manager_note(
        &self,
        employee_id: &str,
        week_start: NaiveDate,
    ) -> AppResult<Option<String>>;

    /// Overwrites status, manager note (NULL when `note` is None) and
    /// `updated_at` in one upsert. No merge of any kind.
    fn set_status(
        &self,
        employee_id: &str,
        week_start: NaiveDate,
        status: TimesheetStatus,
        note: Option<&str>,
    ) -> AppResult<()>;
}
