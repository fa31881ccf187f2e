//! Employee directory lookup and the "current employee" session holder
//! consumed by presentation layers.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;

/// Lookup capability over the external employee directory. The clock and
/// timesheet services never consult it: employee ids stay opaque keys and
/// an unknown id is not an error anywhere in the core.
pub trait EmployeeDirectory {
    fn list(&self) -> Vec<Employee>;
    fn find(&self, id: &str) -> Option<Employee>;
}

/// Fixed roster held in memory.
pub struct StaticDirectory {
    employees: Vec<Employee>,
}

impl StaticDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl EmployeeDirectory for StaticDirectory {
    fn list(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    fn find(&self, id: &str) -> Option<Employee> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }
}

/// Holder for the employee currently driving the session.
#[derive(Default)]
pub struct Session {
    current: Option<Employee>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, employee: Employee) {
        self.current = Some(employee);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Employee> {
        self.current.as_ref()
    }

    /// The selected employee, or `NoEmployeeSelected` for callers that
    /// cannot proceed without one.
    pub fn require_current(&self) -> AppResult<&Employee> {
        self.current().ok_or(AppError::NoEmployeeSelected)
    }
}
