use mould_core::{MachineFields, TaskFields, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker backed by a file
pub fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

pub fn machine_fields(id: &str, status: &str) -> MachineFields {
    MachineFields {
        machine_id: id.to_string(),
        machine_name: format!("Press {id}"),
        location: "Moulding Hall".to_string(),
        status: status.to_string(),
    }
}

pub fn task_fields(id: &str, machine_id: &str, status: &str, due_date: &str) -> TaskFields {
    TaskFields {
        task_id: id.to_string(),
        machine_id: machine_id.to_string(),
        description: format!("Service for {machine_id}"),
        technician: "Quinn".to_string(),
        due_date: due_date.to_string(),
        status: status.to_string(),
    }
}
