pub mod employee;
pub mod overtime;
pub mod punch;
pub mod shift;
pub mod timesheet;
pub mod week_summary;
