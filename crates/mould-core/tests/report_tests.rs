mod common;

use common::{create_test_tracker, machine_fields, task_fields};
use jiff::civil::date;
use mould_core::{
    report, CountTasks, DateRangeParams, Id, ReportKind, ReportRows, ScheduleFields, TaskStatus,
};

#[test]
fn test_status_summary_tracks_store_changes() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    tracker
        .add_machine(&machine_fields("M1", "Operational"))
        .unwrap();
    tracker
        .add_machine(&machine_fields("M2", "Operational"))
        .unwrap();
    tracker
        .add_machine(&machine_fields("M3", "Out of Service"))
        .unwrap();

    let before = tracker.machine_status_summary().unwrap();
    assert_eq!(before.len(), 2);
    assert_eq!(before[0].status, "Operational");
    assert_eq!(before[0].count, 2);

    tracker
        .delete_machine(&Id {
            id: "M3".to_string(),
        })
        .unwrap();

    // Every call rescans the store
    let after = tracker.machine_status_summary().unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after.iter().map(|r| r.count).sum::<usize>(), 2);
}

#[test]
fn test_reports_tolerate_dangling_references() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    tracker
        .add_task(&task_fields("T1", "GHOST", "Pending", "2024-03-01"))
        .unwrap();
    tracker
        .add_schedule(&ScheduleFields {
            schedule_id: "S1".to_string(),
            task_id: "NOPE".to_string(),
            start_time: "09:00:00".to_string(),
            end_time: "08:00:00".to_string(),
        })
        .unwrap();

    let by_machine = tracker
        .count_tasks(&CountTasks {
            field: "machine_id".to_string(),
        })
        .unwrap();
    assert_eq!(by_machine[0].value, "GHOST");

    let utilization = tracker.machine_utilization().unwrap();
    assert_eq!(utilization[0].machine_id, "GHOST");
    assert_eq!(utilization[0].status, TaskStatus::Pending);
}

#[test]
fn test_tasks_by_technician_report() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    let mut fields = task_fields("T1", "M1", "Pending", "2024-03-01");
    tracker.add_task(&fields).unwrap();
    fields.task_id = "T2".to_string();
    fields.technician = "Avery".to_string();
    tracker.add_task(&fields).unwrap();

    let report = tracker
        .run_report(ReportKind::TasksByTechnician, None, date(2024, 3, 2))
        .unwrap();
    match report.rows {
        ReportRows::Fields(rows) => {
            let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
            assert_eq!(values, vec!["Avery", "Quinn"]);
        }
        other => panic!("unexpected report rows: {other:?}"),
    }
}

#[test]
fn test_completed_report_through_run_report() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    tracker
        .add_task(&task_fields("T1", "M1", "Completed", "2024-01-31"))
        .unwrap();
    tracker
        .add_task(&task_fields("T2", "M1", "Completed", "2024-02-01"))
        .unwrap();

    let range = DateRangeParams {
        start_date: "2024-01-01".to_string(),
        end_date: "2024-01-31".to_string(),
    };
    let report = tracker
        .run_report(ReportKind::CompletedByDateRange, Some(&range), date(2024, 6, 1))
        .unwrap();
    assert_eq!(report.title, "Completed Tasks by Date Range");
    match report.rows {
        ReportRows::Tasks(tasks) => {
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].task_id, "T1");
        }
        other => panic!("unexpected report rows: {other:?}"),
    }
}

#[test]
fn test_engine_matches_tracker_on_same_snapshot() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    for (id, status) in [("T1", "Pending"), ("T2", "Overdue"), ("T3", "Completed")] {
        tracker
            .add_task(&task_fields(id, "M1", status, "2024-01-10"))
            .unwrap();
    }

    let snapshot = tracker.list_tasks().unwrap();
    assert_eq!(
        report::status_summary(&snapshot),
        tracker.task_status_summary().unwrap()
    );
    assert_eq!(
        report::filter_by_status(&snapshot, TaskStatus::Overdue),
        tracker.overdue_tasks().unwrap()
    );
}

#[test]
fn test_report_serializes_for_json_output() {
    let (_temp_dir, mut tracker) = create_test_tracker();
    tracker
        .add_machine(&machine_fields("M1", "Under Maintenance"))
        .unwrap();

    let report = tracker
        .run_report(ReportKind::MachineStatus, None, date(2024, 1, 1))
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["title"], "Machine Status Summary");
    assert_eq!(value["shape"], "statuses");
    assert_eq!(value["rows"][0]["status"], "Under Maintenance");
    assert_eq!(value["rows"][0]["count"], 1);
}
