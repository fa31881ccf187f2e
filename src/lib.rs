//! rTimeclock library root.
//! Embedded time-attendance core: append-only punch ledger, clock-in/out
//! validation, shift and overtime derivation, weekly timesheet approvals.
//!
//! There is no CLI or network surface. Callers open the stores they want
//! (SQLite-backed or in-memory), construct the services with references to
//! them, and keep those references for the lifetime of the session.

pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod utils;
