//! Reporting engine: grouped counts and filtered views over record snapshots.
//!
//! Every function here is a pure read over a slice handed in by the caller.
//! Nothing is cached; each call rescans its input. Grouped outputs are
//! sorted by their key so that results are deterministic.
//!
//! References between collections are never resolved. A task whose
//! `machine_id` matches no machine is grouped under that id like any other.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use mould_core::{
//!     models::{Task, TaskStatus},
//!     report,
//! };
//!
//! let task = |id: &str, machine: &str, status| Task {
//!     task_id: id.to_string(),
//!     machine_id: machine.to_string(),
//!     description: String::new(),
//!     technician: "Sam".to_string(),
//!     due_date: date(2024, 1, 10),
//!     status,
//! };
//! let tasks = vec![
//!     task("T1", "M1", TaskStatus::Pending),
//!     task("T2", "M1", TaskStatus::Completed),
//!     task("T3", "M2", TaskStatus::Pending),
//! ];
//!
//! let summary = report::status_summary(&tasks);
//! assert_eq!(summary.iter().map(|row| row.count).sum::<usize>(), tasks.len());
//! ```

use std::collections::BTreeMap;

use jiff::civil::Date;
use log::debug;

use crate::models::{
    DateRange, FieldCount, Machine, StatusCount, Task, TaskField, TaskStatus, UtilizationRow,
};

/// Records that carry a status field a summary can group by.
pub trait HasStatus {
    /// Label of the record's current status.
    fn status_label(&self) -> &'static str;
}

impl HasStatus for Machine {
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

impl HasStatus for Task {
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
}

/// Counts records per status label, one row per label present.
///
/// Rows are ordered lexicographically by label and never carry a zero count.
pub fn status_summary<T: HasStatus>(records: &[T]) -> Vec<StatusCount> {
    let mut groups: BTreeMap<&'static str, usize> = BTreeMap::new();
    for record in records {
        *groups.entry(record.status_label()).or_default() += 1;
    }

    debug!("Status summary over {} records: {} groups", records.len(), groups.len());
    groups
        .into_iter()
        .map(|(status, count)| StatusCount {
            status: status.to_string(),
            count,
        })
        .collect()
}

/// Counts tasks per value of `field`, ordered by value.
pub fn count_by_field(tasks: &[Task], field: TaskField) -> Vec<FieldCount> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for task in tasks {
        *groups.entry(field.value_of(task)).or_default() += 1;
    }

    debug!("Count by {} over {} tasks", field.as_str(), tasks.len());
    groups
        .into_iter()
        .map(|(value, count)| FieldCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// Tasks whose stored status equals `status`, in input order.
///
/// The due date plays no part: an `Overdue` task is one whose status was set
/// to `Overdue`, whatever its due date.
pub fn filter_by_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}

/// Tasks with the given status whose due date lies within `range`
/// (inclusive on both ends), in input order.
pub fn filter_by_status_and_date_range(
    tasks: &[Task],
    status: TaskStatus,
    range: &DateRange,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status && range.contains(task.due_date))
        .cloned()
        .collect()
}

/// Completed tasks due within `range`.
pub fn completed_in_range(tasks: &[Task], range: &DateRange) -> Vec<Task> {
    filter_by_status_and_date_range(tasks, TaskStatus::Completed, range)
}

/// Task counts per machine and status, leaving out `Overdue` tasks.
///
/// Rows are ordered by machine id, then by status label.
pub fn utilization_by_machine_and_status(tasks: &[Task]) -> Vec<UtilizationRow> {
    let mut groups: BTreeMap<(&str, &'static str), (TaskStatus, usize)> = BTreeMap::new();
    for task in tasks
        .iter()
        .filter(|task| TaskStatus::UTILIZATION.contains(&task.status))
    {
        groups
            .entry((task.machine_id.as_str(), task.status.as_str()))
            .or_insert((task.status, 0))
            .1 += 1;
    }

    groups
        .into_iter()
        .map(|((machine_id, _), (status, count))| UtilizationRow {
            machine_id: machine_id.to_string(),
            status,
            count,
        })
        .collect()
}

/// Tasks due strictly before `today` that are not completed, in input order.
///
/// This is computed from dates and is separate from the `Overdue` status
/// filter.
pub fn past_due(tasks: &[Task], today: Date) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.is_past_due(today))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::MachineStatus;

    fn machine(id: &str, status: MachineStatus) -> Machine {
        Machine {
            machine_id: id.to_string(),
            machine_name: format!("Press {id}"),
            location: "Hall A".to_string(),
            status,
        }
    }

    fn task(id: &str, machine_id: &str, status: TaskStatus, due: Date) -> Task {
        Task {
            task_id: id.to_string(),
            machine_id: machine_id.to_string(),
            description: format!("Work for {id}"),
            technician: "Robin".to_string(),
            due_date: due,
            status,
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            task("T1", "M1", TaskStatus::Pending, date(2024, 1, 5)),
            task("T2", "M1", TaskStatus::Completed, date(2024, 1, 20)),
            task("T3", "M2", TaskStatus::Pending, date(2024, 2, 2)),
        ]
    }

    #[test]
    fn test_machine_status_summary() {
        let machines = vec![
            machine("M1", MachineStatus::Operational),
            machine("M2", MachineStatus::UnderMaintenance),
        ];

        let summary = status_summary(&machines);
        assert_eq!(
            summary,
            vec![
                StatusCount {
                    status: "Operational".to_string(),
                    count: 1
                },
                StatusCount {
                    status: "Under Maintenance".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_status_summary_counts_sum_to_total() {
        let mut tasks = sample_tasks();
        tasks.push(task("T4", "M3", TaskStatus::Overdue, date(2023, 12, 1)));
        tasks.push(task("T5", "M3", TaskStatus::InProgress, date(2024, 3, 1)));

        let summary = status_summary(&tasks);
        assert_eq!(summary.iter().map(|row| row.count).sum::<usize>(), tasks.len());
        assert!(summary.iter().all(|row| row.count > 0));

        let labels: Vec<&str> = summary.iter().map(|row| row.status.as_str()).collect();
        assert_eq!(labels, vec!["Completed", "In Progress", "Overdue", "Pending"]);
    }

    #[test]
    fn test_status_summary_of_empty_collection() {
        let machines: Vec<Machine> = Vec::new();
        assert!(status_summary(&machines).is_empty());
    }

    #[test]
    fn test_count_by_machine() {
        let counts = count_by_field(&sample_tasks(), TaskField::MachineId);
        assert_eq!(
            counts,
            vec![
                FieldCount {
                    value: "M1".to_string(),
                    count: 2
                },
                FieldCount {
                    value: "M2".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_count_by_technician() {
        let mut tasks = sample_tasks();
        tasks[2].technician = "Jordan".to_string();

        let counts = count_by_field(&tasks, TaskField::Technician);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].value, "Jordan");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].value, "Robin");
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn test_count_by_machine_keeps_dangling_references() {
        let tasks = vec![task("T9", "NO-SUCH-MACHINE", TaskStatus::Pending, date(2024, 1, 1))];
        let counts = count_by_field(&tasks, TaskField::MachineId);
        assert_eq!(counts[0].value, "NO-SUCH-MACHINE");
    }

    #[test]
    fn test_overdue_filter_uses_stored_status_only() {
        let tasks = vec![
            // Far-future due date, but flagged overdue by hand
            task("T1", "M1", TaskStatus::Overdue, date(2099, 1, 1)),
            // Long past due, but still pending
            task("T2", "M1", TaskStatus::Pending, date(2000, 1, 1)),
        ];

        let overdue = filter_by_status(&tasks, TaskStatus::Overdue);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].task_id, "T1");
    }

    #[test]
    fn test_completed_in_range_is_boundary_inclusive() {
        let tasks = vec![
            task("T1", "M1", TaskStatus::Completed, date(2023, 12, 31)),
            task("T2", "M1", TaskStatus::Completed, date(2024, 1, 1)),
            task("T3", "M1", TaskStatus::Completed, date(2024, 1, 15)),
            task("T4", "M1", TaskStatus::Completed, date(2024, 1, 31)),
            task("T5", "M1", TaskStatus::Completed, date(2024, 2, 1)),
            task("T6", "M1", TaskStatus::Pending, date(2024, 1, 15)),
        ];
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();

        let ids: Vec<String> = completed_in_range(&tasks, &range)
            .into_iter()
            .map(|t| t.task_id)
            .collect();
        assert_eq!(ids, vec!["T2", "T3", "T4"]);
    }

    #[test]
    fn test_date_filter_with_other_status() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
        let pending = filter_by_status_and_date_range(&sample_tasks(), TaskStatus::Pending, &range);
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_utilization_groups_by_machine_and_status() {
        let rows = utilization_by_machine_and_status(&sample_tasks());
        let triples: Vec<(&str, TaskStatus, usize)> = rows
            .iter()
            .map(|row| (row.machine_id.as_str(), row.status, row.count))
            .collect();

        assert_eq!(
            triples,
            vec![
                ("M1", TaskStatus::Completed, 1),
                ("M1", TaskStatus::Pending, 1),
                ("M2", TaskStatus::Pending, 1),
            ]
        );
    }

    #[test]
    fn test_utilization_excludes_overdue() {
        let tasks = vec![
            task("T1", "M1", TaskStatus::Overdue, date(2024, 1, 1)),
            task("T2", "M1", TaskStatus::InProgress, date(2024, 1, 1)),
            task("T3", "M1", TaskStatus::InProgress, date(2024, 1, 2)),
        ];

        let rows = utilization_by_machine_and_status(&tasks);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, TaskStatus::InProgress);
        assert_eq!(rows[0].count, 2);
    }

    #[test]
    fn test_past_due_is_computed_from_dates() {
        let today = date(2024, 1, 21);
        let ids: Vec<String> = past_due(&sample_tasks(), today)
            .into_iter()
            .map(|t| t.task_id)
            .collect();
        // T2 is completed, T3 is not due yet
        assert_eq!(ids, vec!["T1"]);
    }
}
