//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Machine, Schedule, Task};

/// Record kinds that can be named in an operation result.
pub trait Named {
    /// Lowercase noun for the record kind.
    const KIND: &'static str;

    /// Identifier of the record.
    fn id(&self) -> &str;
}

impl Named for Machine {
    const KIND: &'static str = "machine";

    fn id(&self) -> &str {
        &self.machine_id
    }
}

impl Named for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> &str {
        &self.task_id
    }
}

impl Named for Schedule {
    const KIND: &'static str = "schedule";

    fn id(&self) -> &str {
        &self.schedule_id
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use mould_core::{display::CreateResult, Machine, MachineStatus};
///
/// let machine = Machine {
///     machine_id: "M1".to_string(),
///     machine_name: "Engel 200t".to_string(),
///     location: "Hall A".to_string(),
///     status: MachineStatus::Operational,
/// };
/// let output = CreateResult::new(machine).to_string();
/// assert!(output.starts_with("Created machine with ID: M1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Named + fmt::Display> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can list the fields that were changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Named + fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
