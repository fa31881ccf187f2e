//! Punch row model. A punch is an immutable fact: once appended to the
//! ledger it is never updated or deleted.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    /// Convert enum → DB integer code.
    pub fn to_db_code(self) -> i64 {
        match self {
            PunchKind::In => 0,
            PunchKind::Out => 1,
        }
    }

    /// Convert DB integer code → enum.
    pub fn from_db_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PunchKind::In),
            1 => Some(PunchKind::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PunchKind::Out)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Punch {
    pub employee_id: String, // opaque key, never validated against a directory
    pub timestamp: DateTime<FixedOffset>, // ⇔ punches.timestamp (TEXT, RFC 3339)
    pub kind: PunchKind,     // ⇔ punches.kind (INT, 0=in / 1=out)
}

impl Punch {
    pub fn new(employee_id: impl Into<String>, timestamp: DateTime<FixedOffset>, kind: PunchKind) -> Self {
        Self {
            employee_id: employee_id.into(),
            timestamp,
            kind,
        }
    }
}
