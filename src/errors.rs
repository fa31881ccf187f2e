//! Unified application error type.
//! All modules (db, core, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid punch kind code: {0}")]
    InvalidPunchKind(i64),

    #[error("Invalid timesheet status code: {0}")]
    InvalidStatus(i64),

    // ---------------------------
    // Clock rules
    // ---------------------------
    #[error("Employee {0} is already clocked in")]
    AlreadyClockedIn(String),

    #[error("Employee {0} must clock in before clocking out")]
    NotClockedIn(String),

    #[error("Clock-out at {clock_out} cannot be before clock-in at {clock_in}")]
    InvalidOrder {
        clock_in: String,
        clock_out: String,
    },

    #[error("Shift end {end} must be after start {start}")]
    InvalidShift { start: String, end: String },

    // ---------------------------
    // Session
    // ---------------------------
    #[error("No employee selected")]
    NoEmployeeSelected,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
