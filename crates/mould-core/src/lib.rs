//! Core library for the injection-moulding maintenance tracker.
//!
//! This crate keeps machines, maintenance tasks and task schedules in a
//! SQLite record store and derives operational reports from them: status
//! breakdowns, per-machine and per-technician workload, overdue and
//! completed-in-range task lists, and machine utilization.
//!
//! # Layers
//!
//! - [`db`]: the record store (insert, replace, delete, lookup, full scan)
//! - [`report`]: pure grouping and filtering over record snapshots
//! - [`tracker`]: the facade that validates raw input and runs reports
//! - [`display`]: markdown formatting for records, tables and reports
//!
//! # Quick Start
//!
//! ```rust
//! use mould_core::{params::TaskFields, TrackerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = TrackerBuilder::new().in_memory().build()?;
//!
//! tracker.add_task(&TaskFields {
//!     task_id: "T1".to_string(),
//!     machine_id: "M1".to_string(),
//!     description: "Inspect screw and barrel".to_string(),
//!     technician: "Casey".to_string(),
//!     due_date: "2024-01-15".to_string(),
//!     status: "Overdue".to_string(),
//! })?;
//!
//! let overdue = tracker.overdue_tasks()?;
//! assert_eq!(overdue.len(), 1);
//! tracker.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod report;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, Machines, OperationStatus, Schedules, Tasks, UpdateResult};
pub use error::{Result, TrackerError};
pub use models::{
    DateRange, FieldCount, Machine, MachineStatus, Report, ReportKind, ReportRows, Schedule,
    StatusCount, Task, TaskField, TaskStatus, Totals, UtilizationRow,
};
pub use params::{
    CountTasks, DateRangeParams, EditMachine, EditTask, Id, MachineFields, ScheduleFields,
    TaskFields,
};
pub use tracker::{Tracker, TrackerBuilder};
