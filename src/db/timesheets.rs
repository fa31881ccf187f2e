//! SQLite-backed timesheet store.

use crate::db::{TimesheetStore, initialize};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::{TimesheetRecord, TimesheetStatus};
use crate::utils::date::format_date;
use crate::utils::time::now_utc_rfc3339;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::debug;

pub struct SqliteTimesheetStore {
    conn: Connection,
}

impl SqliteTimesheetStore {
    /// Open the store at `path`, creating the file and schema if missing.
    /// The punches and timesheets tables can share one database file.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        initialize::init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Full row for one (employee, week), if any was ever written.
    pub fn get(
        &self,
        employee_id: &str,
        week_start: NaiveDate,
    ) -> AppResult<Option<TimesheetRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT status, manager_note, updated_at FROM timesheets
             WHERE employee_id = ?1 AND week_start = ?2",
        )?;

        let row = stmt
            .query_row(params![employee_id, format_date(week_start)], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .optional()?;

        match row {
            None => Ok(None),
            Some((code, manager_note, updated_at)) => {
                let status =
                    TimesheetStatus::from_db_code(code).ok_or(AppError::InvalidStatus(code))?;
                Ok(Some(TimesheetRecord {
                    employee_id: employee_id.to_string(),
                    week_start,
                    status,
                    manager_note,
                    updated_at,
                }))
            }
        }
    }
}

impl TimesheetStore for SqliteTimesheetStore {
    fn get_status(&self, employee_id: &str, week_start: NaiveDate) -> AppResult<TimesheetStatus> {
        let mut stmt = self.conn.prepare(
            "SELECT status FROM timesheets
             WHERE employee_id = ?1 AND week_start = ?2",
        )?;

        let code: Option<i64> = stmt
            .query_row(params![employee_id, format_date(week_start)], |row| {
                row.get(0)
            })
            .optional()?;

        match code {
            None => Ok(TimesheetStatus::Draft),
            Some(c) => TimesheetStatus::from_db_code(c).ok_or(AppError::InvalidStatus(c)),
        }
    }

    fn get_manager_note(
        &self,
        employee_id: &str,
        week_start: NaiveDate,
    ) -> AppResult<Option<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT manager_note FROM timesheets
             WHERE employee_id = ?1 AND week_start = ?2",
        )?;

        let note: Option<Option<String>> = stmt
            .query_row(params![employee_id, format_date(week_start)], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(note.flatten())
    }

    fn set_status(
        &self,
        employee_id: &str,
        week_start: NaiveDate,
        status: TimesheetStatus,
        note: Option<&str>,
    ) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO timesheets (employee_id, week_start, status, manager_note, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(employee_id, week_start)
             DO UPDATE SET
                 status = excluded.status,
                 manager_note = excluded.manager_note,
                 updated_at = excluded.updated_at",
            params![
                employee_id,
                format_date(week_start),
                status.to_db_code(),
                note,
                now_utc_rfc3339(),
            ],
        )?;

        debug!(employee = %employee_id, week = %week_start, status = ?status, "timesheet status written");
        Ok(())
    }
}
