//! Timesheet workflow: week-boundary arithmetic, the weekly summary join,
//! and the approval state machine.
//!
//! Transitions are unguarded by design: `submit`, `approve` and `reject`
//! each upsert unconditionally, so the last write wins from any state
//! (including overwriting an Approved week). Callers wanting a stricter
//! policy check `get_status` first.

use crate::core::calculator::{overtime, shifts};
use crate::db::{PunchLedger, TimesheetStore};
use crate::errors::AppResult;
use crate::models::timesheet::TimesheetStatus;
use crate::models::week_summary::WeekSummary;
use crate::utils::date;
use chrono::{DateTime, FixedOffset, NaiveDate};
use tracing::info;

pub struct TimesheetWorkflow<'a, L: PunchLedger, S: TimesheetStore> {
    ledger: &'a L,
    store: &'a S,
}

impl<'a, L: PunchLedger, S: TimesheetStore> TimesheetWorkflow<'a, L, S> {
    pub fn new(ledger: &'a L, store: &'a S) -> Self {
        Self { ledger, store }
    }

    /// Monday-aligned start of the payroll week containing `date`.
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        date::week_start(date)
    }

    /// Read-only weekly join: shifts and overtime derived fresh from the
    /// punch ledger over `[week_start, +7 days)`, approval state from the
    /// timesheet store. Calling it twice with no intervening writes returns
    /// the same summary.
    pub fn get_week_summary(
        &self,
        employee_id: &str,
        any_date_in_week: DateTime<FixedOffset>,
        rounding_minutes: u32,
        weekly_threshold_hours: f64,
    ) -> AppResult<WeekSummary> {
        let (start, end) = date::week_bounds(any_date_in_week)?;
        let week = date::week_start(any_date_in_week.date_naive());

        let punches = self.ledger.query_range(employee_id, start, end)?;
        let shifts = shifts::build_shifts(&punches, rounding_minutes);
        let overtime = overtime::calculate_weekly_overtime(&shifts, weekly_threshold_hours);

        let status = self.store.get_status(employee_id, week)?;
        let manager_note = self.store.get_manager_note(employee_id, week)?;

        Ok(WeekSummary {
            shifts,
            overtime,
            status,
            manager_note,
        })
    }

    pub fn get_status(
        &self,
        employee_id: &str,
        any_date_in_week: DateTime<FixedOffset>,
    ) -> AppResult<TimesheetStatus> {
        let week = date::week_start(any_date_in_week.date_naive());
        self.store.get_status(employee_id, week)
    }

    /// Send the week to the manager. Clears any stored note.
    pub fn submit(
        &self,
        employee_id: &str,
        any_date_in_week: DateTime<FixedOffset>,
    ) -> AppResult<()> {
        self.transition(employee_id, any_date_in_week, TimesheetStatus::Submitted, None)
    }

    /// Approve the week, optionally leaving a note.
    pub fn approve(
        &self,
        employee_id: &str,
        any_date_in_week: DateTime<FixedOffset>,
        note: Option<&str>,
    ) -> AppResult<()> {
        self.transition(employee_id, any_date_in_week, TimesheetStatus::Approved, note)
    }

    /// Reject the week. The note is required: the employee needs to know
    /// what to fix before resubmitting.
    pub fn reject(
        &self,
        employee_id: &str,
        any_date_in_week: DateTime<FixedOffset>,
        note: &str,
    ) -> AppResult<()> {
        self.transition(
            employee_id,
            any_date_in_week,
            TimesheetStatus::Rejected,
            Some(note),
        )
    }

    fn transition(
        &self,
        employee_id: &str,
        any_date_in_week: DateTime<FixedOffset>,
        status: TimesheetStatus,
        note: Option<&str>,
    ) -> AppResult<()> {
        let week = date::week_start(any_date_in_week.date_naive());
        self.store.set_status(employee_id, week, status, note)?;

        info!(employee = %employee_id, week = %week, status = ?status, "timesheet transition");
        Ok(())
    }
}
