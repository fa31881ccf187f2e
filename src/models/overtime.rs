//! Weekly regular/overtime hour split.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct OvertimeResult {
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

impl OvertimeResult {
    pub fn new(regular_hours: f64, overtime_hours: f64) -> Self {
        Self {
            regular_hours,
            overtime_hours,
        }
    }

    /// Recomputed from the two rounded parts; may differ from the raw weekly
    /// total by up to 0.01 h at rounding boundaries.
    pub fn total_hours(&self) -> f64 {
        self.regular_hours + self.overtime_hours
    }
}
