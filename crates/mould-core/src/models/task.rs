//! Maintenance task model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A unit of maintenance work assigned to a technician.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique, immutable identifier
    pub task_id: String,

    /// Machine this task is for. Not checked against the machine table.
    pub machine_id: String,

    /// What needs to be done
    pub description: String,

    /// Technician assigned to the task
    pub technician: String,

    /// Calendar date the work is due (stored as `YYYY-MM-DD`)
    pub due_date: Date,

    /// Lifecycle status
    pub status: TaskStatus,
}

impl Task {
    /// Whether the due date lies strictly before `today` and the task is not
    /// yet completed.
    pub fn is_past_due(&self, today: Date) -> bool {
        self.due_date < today && self.status != TaskStatus::Completed
    }
}
