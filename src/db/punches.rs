//! SQLite-backed punch ledger.
//!
//! Timestamps are stored as RFC 3339 text and reload bit-equal, UTC offset
//! included. Range comparisons run over the encoded text, which matches
//! chronological order as long as punches share one offset convention.

use crate::db::{PunchLedger, initialize};
use crate::errors::{AppError, AppResult};
use crate::models::punch::{Punch, PunchKind};
use crate::utils::time::{encode_timestamp, parse_timestamp};
use chrono::{DateTime, FixedOffset};
use rusqlite::{Connection, Row, params};
use std::path::Path;
use tracing::debug;

pub struct SqlitePunchLedger {
    conn: Connection,
}

impl SqlitePunchLedger {
    /// Open the ledger at `path`, creating the file and schema if missing.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}

fn map_row(row: &Row) -> rusqlite::Result<Punch> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_timestamp(&ts_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let kind_code: i64 = row.get("kind")?;
    let kind = PunchKind::from_db_code(kind_code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidPunchKind(kind_code)),
        )
    })?;

    Ok(Punch {
        employee_id: row.get("employee_id")?,
        timestamp,
        kind,
    })
}

impl PunchLedger for SqlitePunchLedger {
    fn append(&self, punch: &Punch) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO punches (employee_id, timestamp, kind)
             VALUES (?1, ?2, ?3)",
            params![
                punch.employee_id,
                encode_timestamp(&punch.timestamp),
                punch.kind.to_db_code(),
            ],
        )?;

        debug!(employee = %punch.employee_id, kind = ?punch.kind, "punch appended");
        Ok(())
    }

    fn query_range(
        &self,
        employee_id: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> AppResult<Vec<Punch>> {
        // Secondary sort on rowid: punches sharing a timestamp come back in
        // insertion order.
        let mut stmt = self.conn.prepare(
            "SELECT employee_id, timestamp, kind FROM punches
             WHERE employee_id = ?1 AND timestamp >= ?2 AND timestamp < ?3
             ORDER BY timestamp ASC, id ASC",
        )?;

        let rows = stmt.query_map(
            params![employee_id, encode_timestamp(&start), encode_timestamp(&end)],
            map_row,
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
