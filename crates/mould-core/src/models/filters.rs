//! Filter and grouping types for report queries.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{calendar, Task};
use crate::error::TrackerError;

/// Closed interval of due dates, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Create a range from two dates. An inverted range is allowed and
    /// matches nothing.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    ///
    /// ```rust
    /// use mould_core::models::DateRange;
    ///
    /// let january = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
    /// assert!(january.contains("2024-01-31".parse().unwrap()));
    /// assert!(!january.contains("2024-02-01".parse().unwrap()));
    /// ```
    pub fn parse(start: &str, end: &str) -> crate::Result<Self> {
        Ok(Self {
            start: calendar::parse_date("start_date", start)?,
            end: calendar::parse_date("end_date", end)?,
        })
    }

    /// Whether `date` falls within the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Task field a count report can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// Group by the referenced machine id
    MachineId,

    /// Group by the assigned technician
    Technician,
}

impl TaskField {
    /// Column name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::MachineId => "machine_id",
            TaskField::Technician => "technician",
        }
    }

    /// Value of this field on a task.
    pub fn value_of<'a>(&self, task: &'a Task) -> &'a str {
        match self {
            TaskField::MachineId => &task.machine_id,
            TaskField::Technician => &task.technician,
        }
    }
}

impl FromStr for TaskField {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "machine_id" | "machine" => Ok(TaskField::MachineId),
            "technician" => Ok(TaskField::Technician),
            _ => Err(TrackerError::invalid_input("field").with_reason(format!(
                "cannot group tasks by '{s}' (expected machine_id or technician)"
            ))),
        }
    }
}
