//! Confirmation messages for operations that return no record.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self { message }
    }

    /// Status for a delete-by-id. Deleting a missing id still succeeds.
    pub fn deleted(kind: &str, id: &str, removed: bool) -> Self {
        if removed {
            Self::success(format!("Deleted {kind} {id}"))
        } else {
            Self::success(format!("No {kind} with ID {id}; nothing to delete"))
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}
