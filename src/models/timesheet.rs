//! Timesheet approval status and the persisted per-week record.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum TimesheetStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    /// Convert enum → DB integer code.
    pub fn to_db_code(self) -> i64 {
        match self {
            TimesheetStatus::Draft => 0,
            TimesheetStatus::Submitted => 1,
            TimesheetStatus::Approved => 2,
            TimesheetStatus::Rejected => 3,
        }
    }

    /// Convert DB integer code → enum.
    pub fn from_db_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TimesheetStatus::Draft),
            1 => Some(TimesheetStatus::Submitted),
            2 => Some(TimesheetStatus::Approved),
            3 => Some(TimesheetStatus::Rejected),
            _ => None,
        }
    }
}

/// One row of the timesheets table. Absence of a row for a given
/// (employee, week) reads as Draft with no note.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimesheetRecord {
    pub employee_id: String,
    pub week_start: NaiveDate,        // ⇔ timesheets.week_start ("YYYY-MM-DD")
    pub status: TimesheetStatus,      // ⇔ timesheets.status (INT 0..3)
    pub manager_note: Option<String>, // ⇔ timesheets.manager_note (TEXT NULL)
    pub updated_at: String,           // ⇔ timesheets.updated_at (TEXT, RFC 3339)
}
