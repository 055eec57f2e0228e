// Copyright 2025 Cowboy AI, LLC.

//! The employee collaborator
//!
//! The demo only ever reads two things from an employee: a display name and
//! a numeric identifier. [`EmployeeSource`] is that read-only capability.
//! [`EmployeeDirectory`] is where an employee comes from; it is the one
//! fallible step of the demo.

use crate::errors::RecordResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Create an identifier
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw integer value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Read-only access to an employee's name and identifier
///
/// Both accessors are pure: repeated calls on the same instance return the
/// same values.
pub trait EmployeeSource {
    /// Display name
    fn name(&self) -> &str;

    /// Identifier
    fn id(&self) -> EmployeeId;
}

/// An employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    id: EmployeeId,
}

impl Employee {
    /// Create an employee
    pub fn new(name: impl Into<String>, id: EmployeeId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl Default for Employee {
    fn default() -> Self {
        Self::new("John Smith", EmployeeId::new(1))
    }
}

impl EmployeeSource for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> EmployeeId {
        self.id
    }
}

/// Provides the employee the demo reports on
pub trait EmployeeDirectory {
    /// Look up the employee
    ///
    /// An error here is fatal: the demo prints nothing.
    fn lookup(&self) -> RecordResult<Employee>;
}

/// Directory that always returns one fixed employee
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    employee: Employee,
}

impl StaticDirectory {
    /// Create a directory serving `employee`
    pub fn new(employee: Employee) -> Self {
        Self { employee }
    }
}

impl EmployeeDirectory for StaticDirectory {
    fn lookup(&self) -> RecordResult<Employee> {
        tracing::debug!(id = %self.employee.id, "employee lookup");
        Ok(self.employee.clone())
    }
}
