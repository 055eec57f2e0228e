// Copyright 2025 Cowboy AI, LLC.

//! The demo runner
//!
//! Builds the three demo records and writes one line per record (one per
//! element for the sequence) in a fixed order:
//!
//! ```text
//! Using anonym type props: name {Name}, age: {Age}
//! Scott, nested City and Adress: Tokyo, New street
//! 5, Emily
//! 8, Mike
//! ```

use crate::employee::{EmployeeDirectory, EmployeeSource};
use crate::errors::RecordResult;
use crate::records::{EmployeeCard, PersonAge, RecordSequence, Residence, ResidentCard};
use std::io::Write;
use tracing::{debug, error, info};

/// Runs the demo against one employee
///
/// Holds no state besides the borrowed employee, so every run produces the
/// same output.
#[derive(Debug)]
pub struct DemoRunner<'a, E: ?Sized> {
    employee: &'a E,
}

impl<'a, E: EmployeeSource + ?Sized> DemoRunner<'a, E> {
    /// Create a runner reading from `employee`
    pub fn new(employee: &'a E) -> Self {
        Self { employee }
    }

    /// Record A: the employee's name and identifier
    pub fn employee_card(&self) -> EmployeeCard {
        let card = EmployeeCard::from_source(self.employee);
        debug!(?card, "built employee card");
        card
    }

    /// Record B: a name with a nested residence
    pub fn resident_card(&self) -> ResidentCard {
        let card = ResidentCard::new("Scott", Residence::new("Tokyo", "New street"));
        debug!(?card, "built resident card");
        card
    }

    /// Record C: two people, in order
    pub fn people(&self) -> RecordSequence<PersonAge> {
        let people = RecordSequence::from([PersonAge::new(5, "Emily"), PersonAge::new(8, "Mike")]);
        debug!(len = people.len(), "built people sequence");
        people
    }

    /// All output lines, in print order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.employee_card().to_string(),
            self.resident_card().to_string(),
        ];
        lines.extend(self.people().iter().map(ToString::to_string));
        lines
    }

    /// Write every line to `out`
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> RecordResult<()> {
        info!("running record demo");
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        info!("record demo finished");
        Ok(())
    }
}

/// Look the employee up in `directory`, then run the demo into `out`
///
/// A failed lookup is returned before anything is written.
pub fn run_with_directory<D, W>(directory: &D, out: &mut W) -> RecordResult<()>
where
    D: EmployeeDirectory + ?Sized,
    W: Write + ?Sized,
{
    let employee = directory.lookup().inspect_err(|e| {
        error!(error = %e, "employee lookup failed");
    })?;
    DemoRunner::new(&employee).run(out)
}
