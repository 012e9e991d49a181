//! Machine model definition.

use serde::{Deserialize, Serialize};

use super::MachineStatus;

/// A physical moulding machine under maintenance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Machine {
    /// Unique, immutable identifier
    pub machine_id: String,

    /// Human-readable machine name
    pub machine_name: String,

    /// Where the machine stands on the shop floor
    pub location: String,

    /// Current operational status
    pub status: MachineStatus,
}
