//! High-level tracker API over the record store and reporting engine.
//!
//! The [`Tracker`] owns the one open [`Database`] for the lifetime of the
//! process. Interface layers hand it raw parameters from [`crate::params`];
//! the tracker validates them into records, performs the store operation and
//! returns typed results. Report requests take a fresh snapshot of the
//! relevant collection and run it through [`crate::report`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interface     │    │     Tracker     │    │    Database     │
//! │   (CLI shell)   │───▶│ (validation,    │───▶│  (record store) │
//! │                 │    │  report runs)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  report (pure)  │
//!                        └─────────────────┘
//! ```
//!
//! - [`builder`]: opens the store at the configured location
//! - [`machine_ops`], [`task_ops`], [`schedule_ops`]: record operations
//! - [`report_ops`]: report runs over store snapshots
//!
//! # Usage
//!
//! ```rust
//! use mould_core::{params::MachineFields, TrackerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = TrackerBuilder::new().in_memory().build()?;
//!
//! tracker.add_machine(&MachineFields {
//!     machine_id: "M1".to_string(),
//!     machine_name: "Engel e-mac".to_string(),
//!     location: "Hall B".to_string(),
//!     status: "Operational".to_string(),
//! })?;
//!
//! let summary = tracker.machine_status_summary()?;
//! assert_eq!(summary[0].status, "Operational");
//!
//! tracker.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod machine_ops;
pub mod report_ops;
pub mod schedule_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

use crate::{db::Database, error::Result};

/// Main tracker interface for machines, tasks, schedules and reports.
pub struct Tracker {
    pub(crate) db: Database,
}

impl Tracker {
    /// Wraps an open database.
    pub(crate) fn new(db: Database) -> Self {
        Self { db }
    }

    /// Closes the underlying store.
    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}
