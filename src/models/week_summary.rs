use crate::models::overtime::OvertimeResult;
use crate::models::shift::Shift;
use crate::models::timesheet::TimesheetStatus;
use serde::Serialize;

/// Everything a caller needs to render one payroll week: the derived
/// shifts, the hour split, and the stored approval state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekSummary {
    pub shifts: Vec<Shift>,
    pub overtime: OvertimeResult,
    pub status: TimesheetStatus,
    pub manager_note: Option<String>,
}
