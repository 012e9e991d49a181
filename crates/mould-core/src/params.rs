//! Parameter structures for tracker operations
//!
//! These structures carry raw field values from an interface layer (the CLI
//! today) into the core without framework-specific derives. Status, date
//! and time fields arrive as plain strings and are validated when the
//! parameters are converted into records, so every record that reaches the
//! store is well-formed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Typed Records  │
//! │  (clap derives) │───▶│ (raw strings)   │───▶│ (validated)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mould_core::{params::TaskFields, Task, TrackerError};
//!
//! let fields = TaskFields {
//!     task_id: "T1".to_string(),
//!     machine_id: "M1".to_string(),
//!     description: "Check hydraulics".to_string(),
//!     technician: "Kim".to_string(),
//!     due_date: "2024-01-31".to_string(),
//!     status: "In Progress".to_string(),
//! };
//! let task = Task::try_from(&fields).unwrap();
//! assert_eq!(task.status.as_str(), "In Progress");
//!
//! let bad = TaskFields { status: "Done".to_string(), ..fields };
//! assert!(matches!(
//!     Task::try_from(&bad),
//!     Err(TrackerError::InvalidEnumValue { .. })
//! ));
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{
        calendar::{parse_date, parse_time},
        DateRange, Machine, Schedule, Task,
    },
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show, delete and edit lookups on every entity kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the record to operate on
    pub id: String,
}

/// Every field of a machine record as entered by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MachineFields {
    pub machine_id: String,
    pub machine_name: String,
    pub location: String,
    /// One of `Operational`, `Under Maintenance`, `Out of Service`
    pub status: String,
}

/// Every field of a task record as entered by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFields {
    pub task_id: String,
    pub machine_id: String,
    pub description: String,
    pub technician: String,
    /// Due date as `YYYY-MM-DD`
    pub due_date: String,
    /// One of `Pending`, `In Progress`, `Completed`, `Overdue`
    pub status: String,
}

/// Every field of a schedule record as entered by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleFields {
    pub schedule_id: String,
    pub task_id: String,
    /// Start of the window as `HH:MM:SS`
    pub start_time: String,
    /// End of the window as `HH:MM:SS`
    pub end_time: String,
}

/// Partial machine update for edit flows. `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditMachine {
    pub machine_id: String,
    pub machine_name: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// Partial task update for edit flows. `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditTask {
    pub task_id: String,
    pub machine_id: Option<String>,
    pub description: Option<String>,
    pub technician: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

/// Parameters for counting tasks by a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountTasks {
    /// `machine_id` or `technician`
    pub field: String,
}

/// Parameters for date-range task reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRangeParams {
    /// First due date included, as `YYYY-MM-DD`
    pub start_date: String,
    /// Last due date included, as `YYYY-MM-DD`
    pub end_date: String,
}

impl DateRangeParams {
    /// Validate both bounds into a [`DateRange`].
    pub fn to_range(&self) -> Result<DateRange> {
        DateRange::parse(&self.start_date, &self.end_date)
    }
}

/// Rejects ids that would be unreachable from any lookup.
fn require_id(field: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(TrackerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(())
}

impl TryFrom<&MachineFields> for Machine {
    type Error = TrackerError;

    fn try_from(fields: &MachineFields) -> Result<Self> {
        require_id("machine_id", &fields.machine_id)?;
        Ok(Machine {
            machine_id: fields.machine_id.clone(),
            machine_name: fields.machine_name.clone(),
            location: fields.location.clone(),
            status: fields.status.parse()?,
        })
    }
}

impl TryFrom<&TaskFields> for Task {
    type Error = TrackerError;

    fn try_from(fields: &TaskFields) -> Result<Self> {
        require_id("task_id", &fields.task_id)?;
        Ok(Task {
            task_id: fields.task_id.clone(),
            machine_id: fields.machine_id.clone(),
            description: fields.description.clone(),
            technician: fields.technician.clone(),
            due_date: parse_date("due_date", &fields.due_date)?,
            status: fields.status.parse()?,
        })
    }
}

impl TryFrom<&ScheduleFields> for Schedule {
    type Error = TrackerError;

    fn try_from(fields: &ScheduleFields) -> Result<Self> {
        require_id("schedule_id", &fields.schedule_id)?;
        Ok(Schedule {
            schedule_id: fields.schedule_id.clone(),
            task_id: fields.task_id.clone(),
            start_time: parse_time("start_time", &fields.start_time)?,
            end_time: parse_time("end_time", &fields.end_time)?,
        })
    }
}

impl EditMachine {
    /// Overlay the provided fields onto a stored machine.
    pub fn apply_to(&self, mut machine: Machine) -> Result<Machine> {
        if let Some(name) = &self.machine_name {
            machine.machine_name = name.clone();
        }
        if let Some(location) = &self.location {
            machine.location = location.clone();
        }
        if let Some(status) = &self.status {
            machine.status = status.parse()?;
        }
        Ok(machine)
    }
}

impl EditTask {
    /// Overlay the provided fields onto a stored task.
    pub fn apply_to(&self, mut task: Task) -> Result<Task> {
        if let Some(machine_id) = &self.machine_id {
            task.machine_id = machine_id.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(technician) = &self.technician {
            task.technician = technician.clone();
        }
        if let Some(due_date) = &self.due_date {
            task.due_date = parse_date("due_date", due_date)?;
        }
        if let Some(status) = &self.status {
            task.status = status.parse()?;
        }
        Ok(task)
    }
}
