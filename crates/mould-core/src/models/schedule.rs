//! Schedule model definition.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

/// A time window booked for a task.
///
/// `start_time` is not required to precede `end_time`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    /// Unique, immutable identifier
    pub schedule_id: String,

    /// Task this window belongs to. Not checked against the task table.
    pub task_id: String,

    /// Start of the window (stored as `HH:MM:SS`)
    pub start_time: Time,

    /// End of the window (stored as `HH:MM:SS`)
    pub end_time: Time,
}
