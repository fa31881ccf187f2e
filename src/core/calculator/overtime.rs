use crate::models::overtime::OvertimeResult;
use crate::models::shift::Shift;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Split the week's total hours at the threshold.
///
/// Regular and overtime are rounded to 2 decimals independently rather than
/// rounding the total; the recomputed sum may differ from the raw total by
/// up to 0.01 h at rounding boundaries, which is accepted.
pub fn calculate_weekly_overtime(shifts: &[Shift], weekly_threshold_hours: f64) -> OvertimeResult {
    let total: f64 = shifts.iter().map(Shift::hours).sum();
    let overtime = (total - weekly_threshold_hours).max(0.0);
    let regular = total - overtime;

    OvertimeResult::new(round2(regular), round2(overtime))
}
