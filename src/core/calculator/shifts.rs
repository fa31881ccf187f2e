//! Reconstruct worked shifts from a raw punch sequence.

use crate::core::calculator::rounding::round_to_nearest_minutes;
use crate::models::punch::{Punch, PunchKind};
use crate::models::shift::Shift;

/// Left-to-right scan holding at most one open In punch:
/// - an In while another In is open supersedes it; the superseded punch
///   produces no shift,
/// - an Out with no open In is ignored,
/// - an Out with an open In emits a shift from the rounded endpoints, unless
///   rounding collapsed the pair to zero or negative length.
pub fn build_shifts(punches: &[Punch], rounding_minutes: u32) -> Vec<Shift> {
    let mut sorted = punches.to_vec();
    // Stable sort: punches sharing a timestamp keep ledger order.
    sorted.sort_by_key(|p| p.timestamp);

    let mut shifts = Vec::new();
    let mut open_in: Option<Punch> = None;

    for punch in sorted {
        match punch.kind {
            PunchKind::In => {
                open_in = Some(punch);
            }
            PunchKind::Out => {
                let Some(in_punch) = open_in.take() else {
                    continue; // stray Out
                };

                let start = round_to_nearest_minutes(in_punch.timestamp, rounding_minutes);
                let end = round_to_nearest_minutes(punch.timestamp, rounding_minutes);

                // The constructor rejects end <= start; such pairs are
                // dropped without error.
                if let Ok(shift) = Shift::new(start, end) {
                    shifts.push(shift);
                }
            }
        }
    }

    shifts
}
