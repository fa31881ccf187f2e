//! Employee lookup data. Owned by the directory; the core treats employee
//! ids as opaque keys and never checks them for existence.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EmployeeRole {
    Employee,
    Manager,
}

impl EmployeeRole {
    pub fn is_manager(&self) -> bool {
        matches!(self, EmployeeRole::Manager)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: EmployeeRole,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: EmployeeRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}
