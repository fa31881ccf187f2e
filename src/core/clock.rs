//! Clock guard: validates clock-in/clock-out against the ledger's current
//! day slice. Clock state is derived from the last punch of the day on
//! every call; no separate "clocked in" flag is stored anywhere.

use crate::db::PunchLedger;
use crate::errors::{AppError, AppResult};
use crate::models::punch::{Punch, PunchKind};
use chrono::{DateTime, FixedOffset};
use tracing::info;

/// The only component allowed to append punches.
pub struct TimeClock<'a, L: PunchLedger> {
    ledger: &'a L,
}

impl<'a, L: PunchLedger> TimeClock<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Append an In punch at `now`, unless the employee's last punch of the
    /// day is already an In.
    pub fn clock_in(&self, employee_id: &str, now: DateTime<FixedOffset>) -> AppResult<()> {
        let punches = self.ledger.query_day(employee_id, now)?;

        if punches.last().is_some_and(|p| p.kind.is_in()) {
            return Err(AppError::AlreadyClockedIn(employee_id.to_string()));
        }

        self.ledger
            .append(&Punch::new(employee_id, now, PunchKind::In))?;

        info!(employee = %employee_id, at = %now, "clock-in");
        Ok(())
    }

    /// Append an Out punch at `now`. Requires an open In punch today, and a
    /// clock-out time no earlier than that In.
    pub fn clock_out(&self, employee_id: &str, now: DateTime<FixedOffset>) -> AppResult<()> {
        let punches = self.ledger.query_day(employee_id, now)?;

        if !punches.last().is_some_and(|p| p.kind.is_in()) {
            return Err(AppError::NotClockedIn(employee_id.to_string()));
        }

        // The guard above already makes the last punch an In; the order
        // check still names the most recent In explicitly.
        if let Some(last_in) = punches.iter().rev().find(|p| p.kind.is_in())
            && now < last_in.timestamp
        {
            return Err(AppError::InvalidOrder {
                clock_in: last_in.timestamp.to_rfc3339(),
                clock_out: now.to_rfc3339(),
            });
        }

        self.ledger
            .append(&Punch::new(employee_id, now, PunchKind::Out))?;

        info!(employee = %employee_id, at = %now, "clock-out");
        Ok(())
    }

    /// The day slice backing "am I clocked in" style displays. A shift
    /// straddling midnight pairs correctly only in the week-wide query run
    /// by the timesheet workflow; this view is day-scoped on purpose.
    pub fn today_punches(
        &self,
        employee_id: &str,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Vec<Punch>> {
        self.ledger.query_day(employee_id, now)
    }

    /// True when the last punch of the day is an In.
    pub fn is_clocked_in(&self, employee_id: &str, now: DateTime<FixedOffset>) -> AppResult<bool> {
        let punches = self.today_punches(employee_id, now)?;
        Ok(punches.last().is_some_and(|p| p.kind.is_in()))
    }
}
