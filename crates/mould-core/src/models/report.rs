//! Row types produced by the reporting engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Task, TaskStatus};
use crate::error::TrackerError;

/// Number of records carrying one status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Number of tasks sharing one value of a grouping field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCount {
    pub value: String,
    pub count: usize,
}

/// Number of tasks for one machine in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationRow {
    pub machine_id: String,
    pub status: TaskStatus,
    pub count: usize,
}

/// Record totals across the three collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub machines: usize,
    pub tasks: usize,
    pub schedules: usize,
}

/// Reports offered by the reporting screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    MachineStatus,
    TaskStatus,
    TasksByMachine,
    TasksByTechnician,
    OverdueTasks,
    CompletedByDateRange,
    MachineUtilization,
    PastDue,
}

impl ReportKind {
    /// Every report, in menu order.
    pub const ALL: [ReportKind; 8] = [
        ReportKind::MachineStatus,
        ReportKind::TaskStatus,
        ReportKind::TasksByMachine,
        ReportKind::TasksByTechnician,
        ReportKind::OverdueTasks,
        ReportKind::CompletedByDateRange,
        ReportKind::MachineUtilization,
        ReportKind::PastDue,
    ];

    /// Heading shown above the report.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::MachineStatus => "Machine Status Summary",
            ReportKind::TaskStatus => "Task Status Summary",
            ReportKind::TasksByMachine => "Maintenance Tasks by Machine",
            ReportKind::TasksByTechnician => "Tasks by Technician",
            ReportKind::OverdueTasks => "Overdue Tasks",
            ReportKind::CompletedByDateRange => "Completed Tasks by Date Range",
            ReportKind::MachineUtilization => "Machine Utilization",
            ReportKind::PastDue => "Past Due Tasks",
        }
    }

    /// Short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::MachineStatus => "machine-status",
            ReportKind::TaskStatus => "task-status",
            ReportKind::TasksByMachine => "by-machine",
            ReportKind::TasksByTechnician => "by-technician",
            ReportKind::OverdueTasks => "overdue",
            ReportKind::CompletedByDateRange => "completed",
            ReportKind::MachineUtilization => "utilization",
            ReportKind::PastDue => "past-due",
        }
    }
}

impl FromStr for ReportKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                TrackerError::invalid_input("report").with_reason(format!("unknown report '{s}'"))
            })
    }
}

/// Output of one report run, tagged with the report that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "rows", rename_all = "snake_case")]
pub enum ReportRows {
    /// Grouped counts by status label
    Statuses(Vec<StatusCount>),
    /// Grouped counts by a task field
    Fields(Vec<FieldCount>),
    /// Filtered task records
    Tasks(Vec<Task>),
    /// Per-machine counts by status
    Utilization(Vec<UtilizationRow>),
}

impl ReportRows {
    /// Number of rows in the report.
    pub fn len(&self) -> usize {
        match self {
            ReportRows::Statuses(rows) => rows.len(),
            ReportRows::Fields(rows) => rows.len(),
            ReportRows::Tasks(rows) => rows.len(),
            ReportRows::Utilization(rows) => rows.len(),
        }
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A titled report ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip)]
    pub kind: ReportKind,
    pub title: &'static str,
    #[serde(flatten)]
    pub rows: ReportRows,
}

impl Report {
    /// Wrap report rows with the heading of `kind`.
    pub fn new(kind: ReportKind, rows: ReportRows) -> Self {
        Self {
            kind,
            title: kind.title(),
            rows,
        }
    }
}
