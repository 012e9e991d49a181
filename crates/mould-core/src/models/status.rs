//! Status enumerations for machines and tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Operational state of a moulding machine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MachineStatus {
    /// Machine is running normally
    #[serde(rename = "Operational")]
    Operational,

    /// Machine is being serviced
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,

    /// Machine is not available
    #[serde(rename = "Out of Service")]
    OutOfService,
}

impl MachineStatus {
    /// Every status in display order.
    pub const ALL: [MachineStatus; 3] = [
        MachineStatus::Operational,
        MachineStatus::UnderMaintenance,
        MachineStatus::OutOfService,
    ];

    /// Label stored in the database and shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineStatus::Operational => "Operational",
            MachineStatus::UnderMaintenance => "Under Maintenance",
            MachineStatus::OutOfService => "Out of Service",
        }
    }

    /// Position of this status in the edit form's status choices.
    pub fn display_index(&self) -> usize {
        match self {
            MachineStatus::Operational => 0,
            MachineStatus::UnderMaintenance => 1,
            MachineStatus::OutOfService => 2,
        }
    }

    /// Display index for a raw stored label. Unrecognized labels fall into
    /// the last slot.
    ///
    /// ```rust
    /// use mould_core::models::MachineStatus;
    ///
    /// assert_eq!(MachineStatus::index_for_label("Operational"), 0);
    /// assert_eq!(MachineStatus::index_for_label("Under Maintenance"), 1);
    /// assert_eq!(MachineStatus::index_for_label("scrapped"), 2);
    /// ```
    pub fn index_for_label(label: &str) -> usize {
        label
            .parse::<MachineStatus>()
            .map(|status| status.display_index())
            .unwrap_or(MachineStatus::OutOfService.display_index())
    }
}

impl FromStr for MachineStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Operational" => Ok(MachineStatus::Operational),
            "Under Maintenance" | "UnderMaintenance" => Ok(MachineStatus::UnderMaintenance),
            "Out of Service" | "OutOfService" => Ok(MachineStatus::OutOfService),
            _ => Err(TrackerError::InvalidEnumValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle state of a maintenance task.
///
/// `Overdue` is assigned by whoever edits the task. It is never derived from
/// the due date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskStatus {
    /// Task has not been started
    #[serde(rename = "Pending")]
    Pending,

    /// Task is being worked on
    #[serde(rename = "In Progress")]
    InProgress,

    /// Task has been finished
    #[serde(rename = "Completed")]
    Completed,

    /// Task was flagged as late
    #[serde(rename = "Overdue")]
    Overdue,
}

impl TaskStatus {
    /// Every status in display order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Overdue,
    ];

    /// Statuses counted by the machine utilization report.
    pub const UTILIZATION: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Label stored in the database and shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        }
    }

    /// Position of this status in the edit form's status choices.
    pub fn display_index(&self) -> usize {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Overdue => 3,
        }
    }

    /// Display index for a raw stored label. Unrecognized labels share the
    /// `Overdue` slot.
    ///
    /// ```rust
    /// use mould_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::index_for_label("In Progress"), 1);
    /// assert_eq!(TaskStatus::index_for_label("Overdue"), 3);
    /// assert_eq!(TaskStatus::index_for_label("cancelled"), 3);
    /// ```
    pub fn index_for_label(label: &str) -> usize {
        label
            .parse::<TaskStatus>()
            .map(|status| status.display_index())
            .unwrap_or(TaskStatus::Overdue.display_index())
    }

    /// Get status with an icon for list display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "○ Pending",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Overdue => "! Overdue",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "In Progress" | "InProgress" => Ok(TaskStatus::InProgress),
            "Completed" => Ok(TaskStatus::Completed),
            "Overdue" => Ok(TaskStatus::Overdue),
            _ => Err(TrackerError::InvalidEnumValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}
