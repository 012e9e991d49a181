//! Data models for machines, maintenance tasks and schedules.
//!
//! This module contains the domain records kept by the record store and the
//! row types produced by the reporting engine. Display implementations for
//! these models are located in [`crate::display::models`] so that
//! presentation stays apart from the data structures.
//!
//! Status fields are closed enumerations. Raw labels coming from an
//! interface layer are parsed with [`std::str::FromStr`] and rejected with
//! [`crate::TrackerError::InvalidEnumValue`] when they fall outside the set.
//!
//! # Examples
//!
//! ```rust
//! use mould_core::models::{Machine, MachineStatus, Task, TaskStatus};
//! use jiff::civil::date;
//!
//! let machine = Machine {
//!     machine_id: "M1".to_string(),
//!     machine_name: "Engel 200t".to_string(),
//!     location: "Hall A".to_string(),
//!     status: "Under Maintenance".parse().unwrap(),
//! };
//! assert_eq!(machine.status, MachineStatus::UnderMaintenance);
//!
//! let task = Task {
//!     task_id: "T1".to_string(),
//!     machine_id: machine.machine_id.clone(),
//!     description: "Replace heater band".to_string(),
//!     technician: "Dana".to_string(),
//!     due_date: date(2024, 1, 15),
//!     status: TaskStatus::Pending,
//! };
//! assert!(task.is_past_due(date(2024, 2, 1)));
//! ```

pub mod calendar;
pub mod filters;
pub mod machine;
pub mod report;
pub mod schedule;
pub mod status;
pub mod task;


pub use filters::{DateRange, TaskField};
pub use machine::Machine;
pub use report::{
    FieldCount, Report, ReportKind, ReportRows, StatusCount, Totals, UtilizationRow,
};
pub use schedule::Schedule;
pub use status::{MachineStatus, TaskStatus};
pub use task::Task;
