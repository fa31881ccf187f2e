//! In-memory backends for both storage traits. Same ordering and upsert
//! contracts as the SQLite implementations; nothing survives the process.

use crate::db::{PunchLedger, TimesheetStore};
use crate::errors::AppResult;
use crate::models::punch::Punch;
use crate::models::timesheet::{TimesheetRecord, TimesheetStatus};
use crate::utils::time::now_utc_rfc3339;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemoryPunchLedger {
    punches: RefCell<Vec<Punch>>,
}

impl InMemoryPunchLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PunchLedger for InMemoryPunchLedger {
    fn append(&self, punch: &Punch) -> AppResult<()> {
        self.punches.borrow_mut().push(punch.clone());
        Ok(())
    }

    fn query_range(
        &self,
        employee_id: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> AppResult<Vec<Punch>> {
        let mut out: Vec<Punch> = self
            .punches
            .borrow()
            .iter()
            .filter(|p| {
                p.employee_id == employee_id && p.timestamp >= start && p.timestamp < end
            })
            .cloned()
            .collect();

        // Stable sort: equal timestamps keep insertion order.
        out.sort_by_key(|p| p.timestamp);
        Ok(out)
    }
}

#[derive(Default)]
pub struct InMemoryTimesheetStore {
    records: RefCell<HashMap<(String, NaiveDate), TimesheetRecord>>,
}

impl InMemoryTimesheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, employee_id: &str, week_start: NaiveDate) -> Option<TimesheetRecord> {
        self.records
            .borrow()
            .get(&(employee_id.to_string(), week_start))
            .cloned()
    }
}

impl TimesheetStore for InMemoryTimesheetStore {
    fn get_status(&self, employee_id: &str, week_start: NaiveDate) -> AppResult<TimesheetStatus> {
        Ok(self
            .get(employee_id, week_start)
            .map(|r| r.status)
            .unwrap_or_default())
    }

    fn get_manager_note(
        &self,
        employee_id: &str,
        week_start: NaiveDate,
    ) -> AppResult<Option<String>> {
        Ok(self.get(employee_id, week_start).and_then(|r| r.manager_note))
    }

    fn set_status(
        &self,
        employee_id: &str,
        week_start: NaiveDate,
        status: TimesheetStatus,
        note: Option<&str>,
    ) -> AppResult<()> {
        let record = TimesheetRecord {
            employee_id: employee_id.to_string(),
            week_start,
            status,
            manager_note: note.map(str::to_string),
            updated_at: now_utc_rfc3339(),
        };

        self.records
            .borrow_mut()
            .insert((employee_id.to_string(), week_start), record);
        Ok(())
    }
}
