//! Tests for the tracker module.

use jiff::civil::{date, time};
use tempfile::TempDir;

use super::*;
use crate::{
    error::TrackerError,
    models::{ReportKind, ReportRows, TaskStatus},
    params::{
        CountTasks, DateRangeParams, EditMachine, EditTask, Id, MachineFields, ScheduleFields,
        TaskFields,
    },
};

fn create_test_tracker() -> Tracker {
    TrackerBuilder::new()
        .in_memory()
        .build()
        .expect("Failed to create tracker")
}

fn machine(id: &str, status: &str) -> MachineFields {
    MachineFields {
        machine_id: id.to_string(),
        machine_name: format!("Machine {id}"),
        location: "Hall A".to_string(),
        status: status.to_string(),
    }
}

fn task(id: &str, machine_id: &str, status: &str, due_date: &str) -> TaskFields {
    TaskFields {
        task_id: id.to_string(),
        machine_id: machine_id.to_string(),
        description: format!("Maintenance {id}"),
        technician: "Morgan".to_string(),
        due_date: due_date.to_string(),
        status: status.to_string(),
    }
}

fn id(value: &str) -> Id {
    Id {
        id: value.to_string(),
    }
}

#[test]
fn test_machine_status_summary_scenario() {
    let mut tracker = create_test_tracker();
    tracker.add_machine(&machine("M1", "Operational")).unwrap();
    tracker
        .add_machine(&machine("M2", "Under Maintenance"))
        .unwrap();

    let summary: Vec<(String, usize)> = tracker
        .machine_status_summary()
        .unwrap()
        .into_iter()
        .map(|row| (row.status, row.count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Operational".to_string(), 1),
            ("Under Maintenance".to_string(), 1)
        ]
    );
}

#[test]
fn test_task_grouping_scenario() {
    let mut tracker = create_test_tracker();
    tracker.add_task(&task("T1", "M1", "Pending", "2024-01-02")).unwrap();
    tracker
        .add_task(&task("T2", "M1", "Completed", "2024-01-03"))
        .unwrap();
    tracker.add_task(&task("T3", "M2", "Pending", "2024-01-04")).unwrap();

    let by_machine: Vec<(String, usize)> = tracker
        .count_tasks(&CountTasks {
            field: "machine_id".to_string(),
        })
        .unwrap()
        .into_iter()
        .map(|row| (row.value, row.count))
        .collect();
    assert_eq!(
        by_machine,
        vec![("M1".to_string(), 2), ("M2".to_string(), 1)]
    );

    let utilization: Vec<(String, TaskStatus, usize)> = tracker
        .machine_utilization()
        .unwrap()
        .into_iter()
        .map(|row| (row.machine_id, row.status, row.count))
        .collect();
    assert_eq!(
        utilization,
        vec![
            ("M1".to_string(), TaskStatus::Completed, 1),
            ("M1".to_string(), TaskStatus::Pending, 1),
            ("M2".to_string(), TaskStatus::Pending, 1),
        ]
    );
}

#[test]
fn test_count_tasks_rejects_unknown_field() {
    let tracker = create_test_tracker();
    let err = tracker
        .count_tasks(&CountTasks {
            field: "location".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[test]
fn test_overdue_report_ignores_due_date() {
    let mut tracker = create_test_tracker();
    tracker
        .add_task(&task("T1", "M1", "Overdue", "2999-12-31"))
        .unwrap();
    tracker.add_task(&task("T2", "M1", "Pending", "2000-01-01")).unwrap();

    let overdue = tracker.overdue_tasks().unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].task_id, "T1");
}

#[test]
fn test_completed_tasks_in_january() {
    let mut tracker = create_test_tracker();
    tracker
        .add_task(&task("T1", "M1", "Completed", "2024-01-01"))
        .unwrap();
    tracker
        .add_task(&task("T2", "M1", "Completed", "2024-01-31"))
        .unwrap();
    tracker
        .add_task(&task("T3", "M1", "Completed", "2024-02-01"))
        .unwrap();
    tracker
        .add_task(&task("T4", "M1", "In Progress", "2024-01-15"))
        .unwrap();

    let range = DateRangeParams {
        start_date: "2024-01-01".to_string(),
        end_date: "2024-01-31".to_string(),
    };
    let ids: Vec<String> = tracker
        .completed_tasks(&range)
        .unwrap()
        .into_iter()
        .map(|t| t.task_id)
        .collect();
    assert_eq!(ids, vec!["T1", "T2"]);

    let in_progress = tracker
        .tasks_with_status_in_range("In Progress", &range)
        .unwrap();
    assert_eq!(in_progress.len(), 1);
}

#[test]
fn test_completed_tasks_rejects_bad_range() {
    let tracker = create_test_tracker();
    let err = tracker
        .completed_tasks(&DateRangeParams {
            start_date: "2024-1-1".to_string(),
            end_date: "2024-01-31".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidDateFormat { field: "start_date", .. }
    ));
}

#[test]
fn test_tasks_with_status_rejects_unknown_label() {
    let tracker = create_test_tracker();
    assert!(matches!(
        tracker.tasks_with_status("Late"),
        Err(TrackerError::InvalidEnumValue { .. })
    ));
}

#[test]
fn test_add_machine_with_invalid_status_stores_nothing() {
    let mut tracker = create_test_tracker();
    let err = tracker.add_machine(&machine("M1", "Idle")).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidEnumValue { .. }));
    assert!(tracker.list_machines().unwrap().is_empty());
}

#[test]
fn test_edit_machine_keeps_unspecified_fields() {
    let mut tracker = create_test_tracker();
    tracker.add_machine(&machine("M1", "Operational")).unwrap();

    let edited = tracker
        .edit_machine(&EditMachine {
            machine_id: "M1".to_string(),
            status: Some("Out of Service".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(edited.machine_name, "Machine M1");

    let stored = tracker.show_machine(&id("M1")).unwrap();
    assert_eq!(stored, edited);
    assert_eq!(stored.status.display_index(), 2);
}

#[test]
fn test_edit_missing_task_is_not_found() {
    let mut tracker = create_test_tracker();
    let err = tracker
        .edit_task(&EditTask {
            task_id: "T404".to_string(),
            status: Some("Completed".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::NotFound { entity: "Task", .. }));
}

#[test]
fn test_run_report_titles_and_shapes() {
    let mut tracker = create_test_tracker();
    tracker.add_machine(&machine("M1", "Operational")).unwrap();
    tracker.add_task(&task("T1", "M1", "Pending", "2024-01-02")).unwrap();

    let today = date(2024, 6, 1);
    let status = tracker
        .run_report(ReportKind::MachineStatus, None, today)
        .unwrap();
    assert_eq!(status.title, "Machine Status Summary");
    assert!(matches!(status.rows, ReportRows::Statuses(ref rows) if rows.len() == 1));

    let past_due = tracker.run_report(ReportKind::PastDue, None, today).unwrap();
    assert!(matches!(past_due.rows, ReportRows::Tasks(ref rows) if rows.len() == 1));

    let err = tracker
        .run_report(ReportKind::CompletedByDateRange, None, today)
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[test]
fn test_totals_count_every_collection() {
    let mut tracker = create_test_tracker();
    tracker.add_machine(&machine("M1", "Operational")).unwrap();
    tracker.add_task(&task("T1", "M1", "Pending", "2024-01-02")).unwrap();
    tracker.add_task(&task("T2", "M1", "Pending", "2024-01-03")).unwrap();

    let totals = tracker.totals().unwrap();
    assert_eq!(totals.machines, 1);
    assert_eq!(totals.tasks, 2);
    assert_eq!(totals.schedules, 0);
}

#[test]
fn test_records_survive_close_and_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("maintenance.db");

    let mut tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create tracker");
    tracker.add_machine(&machine("M1", "Operational")).unwrap();
    tracker.close().expect("Failed to close tracker");

    let reopened = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to reopen tracker");
    assert_eq!(reopened.list_machines().unwrap().len(), 1);
}

#[test]
fn test_replace_machine_updates_every_field() {
    let mut tracker = create_test_tracker();
    tracker.add_machine(&machine("M1", "Operational")).unwrap();

    let replacement = MachineFields {
        machine_id: "M1".to_string(),
        machine_name: "Sumitomo SE180".to_string(),
        location: "Hall C".to_string(),
        status: "Under Maintenance".to_string(),
    };
    let replaced = tracker.replace_machine(&replacement).unwrap();

    let stored = tracker.show_machine(&id("M1")).unwrap();
    assert_eq!(stored, replaced);
    assert_eq!(stored.machine_name, "Sumitomo SE180");
    assert_eq!(stored.location, "Hall C");
    assert_eq!(stored.status.as_str(), "Under Maintenance");
}

#[test]
fn test_replace_task_updates_every_field() {
    let mut tracker = create_test_tracker();
    tracker.add_task(&task("T1", "M1", "Pending", "2024-01-02")).unwrap();

    let replacement = TaskFields {
        task_id: "T1".to_string(),
        machine_id: "M2".to_string(),
        description: "Swap mould clamps".to_string(),
        technician: "Rene".to_string(),
        due_date: "2024-03-15".to_string(),
        status: "Completed".to_string(),
    };
    tracker.replace_task(&replacement).unwrap();

    let stored = tracker.show_task(&id("T1")).unwrap();
    assert_eq!(stored.machine_id, "M2");
    assert_eq!(stored.description, "Swap mould clamps");
    assert_eq!(stored.technician, "Rene");
    assert_eq!(stored.due_date, date(2024, 3, 15));
    assert_eq!(stored.status, TaskStatus::Completed);
}

#[test]
fn test_replace_missing_records_is_not_found() {
    let mut tracker = create_test_tracker();

    let err = tracker
        .replace_machine(&machine("M404", "Operational"))
        .unwrap_err();
    assert!(matches!(err, TrackerError::NotFound { entity: "Machine", .. }));

    let err = tracker
        .replace_task(&task("T404", "M1", "Pending", "2024-01-02"))
        .unwrap_err();
    assert!(matches!(err, TrackerError::NotFound { entity: "Task", .. }));
    assert!(tracker.list_tasks().unwrap().is_empty());
}

#[test]
fn test_show_schedule() {
    let mut tracker = create_test_tracker();
    tracker
        .add_schedule(&ScheduleFields {
            schedule_id: "S1".to_string(),
            task_id: "T1".to_string(),
            start_time: "06:00:00".to_string(),
            end_time: "07:45:00".to_string(),
        })
        .unwrap();

    let schedule = tracker.show_schedule(&id("S1")).unwrap();
    assert_eq!(schedule.start_time, time(6, 0, 0, 0));
    assert_eq!(schedule.end_time, time(7, 45, 0, 0));

    let err = tracker.show_schedule(&id("S2")).unwrap_err();
    assert!(matches!(err, TrackerError::NotFound { entity: "Schedule", .. }));
}

#[test]
fn test_add_schedule_rejects_leap_second() {
    let mut tracker = create_test_tracker();
    let err = tracker
        .add_schedule(&ScheduleFields {
            schedule_id: "S1".to_string(),
            task_id: "T1".to_string(),
            start_time: "23:00:00".to_string(),
            end_time: "23:59:60".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        TrackerError::InvalidDateFormat { field: "end_time", .. }
    ));
    assert!(tracker.list_schedules().unwrap().is_empty());
}
