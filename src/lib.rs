// Copyright 2025 Cowboy AI, LLC.

//! # Anonym Records
//!
//! Small demonstration of structural records: immutable values whose fields
//! are all supplied when they are built.
//!
//! - **Records**: flat ([`EmployeeCard`]), nested ([`ResidentCard`] holding a
//!   [`Residence`]) and homogeneous sequences ([`RecordSequence`] of
//!   [`PersonAge`])
//! - **Shapes**: the ordered field names and kinds of a record
//!   ([`RecordShape`]), used to reject mixed-shape sequences parsed at runtime
//! - **Employee**: the read-only collaborator the first record is built from
//! - **Runner**: prints every record in a fixed order
//!
//! ```rust
//! use anonym_records::{DemoRunner, Employee, EmployeeId};
//!
//! let employee = Employee::new("Alice", EmployeeId::new(42));
//! let lines = DemoRunner::new(&employee).lines();
//! assert_eq!(lines[0], "Using anonym type props: name Alice, age: 42");
//! assert_eq!(lines.len(), 4);
//! ```

#![warn(missing_docs)]

mod config;
mod employee;
mod errors;
mod records;
mod runner;
mod shape;

pub use config::{DemoConfig, DEFAULT_LOG_FILTER, LOG_ENV_VAR};
pub use employee::{Employee, EmployeeDirectory, EmployeeId, EmployeeSource, StaticDirectory};
pub use errors::{RecordError, RecordResult};
pub use records::{
    EmployeeCard, PersonAge, RecordSequence, Residence, ResidentCard, ValueObject,
};
pub use runner::{run_with_directory, DemoRunner};
pub use shape::{FieldKind, RecordShape};
