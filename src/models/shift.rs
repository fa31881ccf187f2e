//! A worked shift, reconstructed from an In/Out punch pair.
//! Shifts are derived on every query and never persisted.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Shift {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl Shift {
    /// Invariant: `end > start`. The shift builder filters zero-length
    /// intervals before constructing, but the constructor enforces the
    /// invariant on its own as well.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::InvalidShift {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Worked duration in fractional hours.
    pub fn hours(&self) -> f64 {
        let seconds = (self.end - self.start).num_seconds();
        seconds as f64 / 3600.0
    }
}
