//! Collection wrapper types for displaying groups of records and reports.
//!
//! Collections render as markdown tables. Empty collections render a short
//! notice instead of an empty table.

use std::fmt;

use crate::models::{
    calendar::{format_date, format_time},
    FieldCount, Machine, Report, ReportRows, Schedule, StatusCount, Task, UtilizationRow,
};

/// Escapes a value for use inside a markdown table cell.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Newtype wrapper for displaying a list of machines.
///
/// # Examples
///
/// ```rust
/// use mould_core::{display::Machines, Machine, MachineStatus};
///
/// let machines = Machines(vec![Machine {
///     machine_id: "M1".to_string(),
///     machine_name: "Engel 200t".to_string(),
///     location: "Hall A".to_string(),
///     status: MachineStatus::Operational,
/// }]);
/// let output = machines.to_string();
/// assert!(output.contains("| M1 | Engel 200t | Hall A | Operational |"));
/// ```
pub struct Machines(pub Vec<Machine>);

impl fmt::Display for Machines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No machines found.");
        }

        writeln!(f, "| Machine ID | Machine Name | Location | Status |")?;
        writeln!(f, "|---|---|---|---|")?;
        for machine in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                cell(&machine.machine_id),
                cell(&machine.machine_name),
                cell(&machine.location),
                machine.status
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of tasks.
pub struct Tasks(pub Vec<Task>);

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }

        writeln!(
            f,
            "| Task ID | Machine ID | Description | Technician | Due Date | Status |"
        )?;
        writeln!(f, "|---|---|---|---|---|---|")?;
        for task in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} |",
                cell(&task.task_id),
                cell(&task.machine_id),
                cell(&task.description),
                cell(&task.technician),
                format_date(task.due_date),
                task.status
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of schedules.
pub struct Schedules(pub Vec<Schedule>);

impl fmt::Display for Schedules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No schedules found.");
        }

        writeln!(f, "| Schedule ID | Task ID | Start Time | End Time |")?;
        writeln!(f, "|---|---|---|---|")?;
        for schedule in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                cell(&schedule.schedule_id),
                cell(&schedule.task_id),
                format_time(schedule.start_time),
                format_time(schedule.end_time)
            )?;
        }
        Ok(())
    }
}

fn fmt_status_counts(f: &mut fmt::Formatter<'_>, rows: &[StatusCount]) -> fmt::Result {
    writeln!(f, "| Status | Count |")?;
    writeln!(f, "|---|---|")?;
    for row in rows {
        writeln!(f, "| {} | {} |", row.status, row.count)?;
    }
    Ok(())
}

fn fmt_field_counts(f: &mut fmt::Formatter<'_>, rows: &[FieldCount]) -> fmt::Result {
    writeln!(f, "| Category | Count |")?;
    writeln!(f, "|---|---|")?;
    for row in rows {
        writeln!(f, "| {} | {} |", cell(&row.value), row.count)?;
    }
    Ok(())
}

fn fmt_utilization(f: &mut fmt::Formatter<'_>, rows: &[UtilizationRow]) -> fmt::Result {
    writeln!(f, "| Machine ID | Status | Count |")?;
    writeln!(f, "|---|---|---|")?;
    for row in rows {
        writeln!(f, "| {} | {} | {} |", cell(&row.machine_id), row.status, row.count)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        if self.rows.is_empty() {
            return writeln!(f, "No data for this report.");
        }

        match &self.rows {
            ReportRows::Statuses(rows) => fmt_status_counts(f, rows),
            ReportRows::Fields(rows) => fmt_field_counts(f, rows),
            ReportRows::Tasks(rows) => write!(f, "{}", Tasks(rows.clone())),
            ReportRows::Utilization(rows) => fmt_utilization(f, rows),
        }
    }
}
