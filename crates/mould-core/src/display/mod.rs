//! Display formatting for records, collections, reports and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers give collections and operation outcomes their own
//! formatting. Everything renders as markdown so the CLI can print it as
//! plain text or through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Machine, Task) │───▶│ Report tables   │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: record tables and report rendering
//! - [`results`]: create and update results
//! - [`status`]: success / failure messages
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use mould_core::display::OperationStatus;
//!
//! let status = OperationStatus::deleted("machine", "M1", true);
//! assert_eq!(status.to_string(), "Success: Deleted machine M1\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Machines, Schedules, Tasks};
pub use results::{CreateResult, Named, UpdateResult};
pub use status::OperationStatus;
