//! Database schema. Creation is idempotent and runs every time a SQLite
//! store is opened.

use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::debug;

pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL,
            timestamp    TEXT NOT NULL,
            kind         INTEGER NOT NULL CHECK(kind IN (0, 1))
        );

        CREATE INDEX IF NOT EXISTS idx_punches_employee_timestamp
            ON punches(employee_id, timestamp);

        CREATE TABLE IF NOT EXISTS timesheets (
            employee_id  TEXT NOT NULL,
            week_start   TEXT NOT NULL,
            status       INTEGER NOT NULL CHECK(status IN (0, 1, 2, 3)),
            manager_note TEXT,
            updated_at   TEXT NOT NULL,
            PRIMARY KEY (employee_id, week_start)
        );
        "#,
    )?;

    debug!("database schema ready");
    Ok(())
}
