//! Machine operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::Machine,
    params::{EditMachine, Id, MachineFields},
};

impl Tracker {
    /// Adds a machine from raw fields.
    pub fn add_machine(&mut self, fields: &MachineFields) -> Result<Machine> {
        let machine = Machine::try_from(fields)?;
        self.db.insert_machine(&machine)?;
        Ok(machine)
    }

    /// Replaces every non-id field of an existing machine.
    pub fn replace_machine(&mut self, fields: &MachineFields) -> Result<Machine> {
        let machine = Machine::try_from(fields)?;
        self.db.replace_machine(&machine)?;
        Ok(machine)
    }

    /// Loads a machine, overlays the given fields and saves it back.
    pub fn edit_machine(&mut self, edit: &EditMachine) -> Result<Machine> {
        let stored = self.show_machine(&Id {
            id: edit.machine_id.clone(),
        })?;
        let machine = edit.apply_to(stored)?;
        self.db.replace_machine(&machine)?;
        Ok(machine)
    }

    /// Deletes a machine. Returns whether a record was removed; a missing id
    /// is not an error.
    pub fn delete_machine(&mut self, params: &Id) -> Result<bool> {
        self.db.delete_machine(&params.id)
    }

    /// Retrieves a machine, failing with `NotFound` if it does not exist.
    pub fn show_machine(&self, params: &Id) -> Result<Machine> {
        self.db
            .get_machine(&params.id)?
            .ok_or_else(|| TrackerError::not_found("Machine", &params.id))
    }

    /// Lists all machines in insertion order.
    pub fn list_machines(&self) -> Result<Vec<Machine>> {
        self.db.list_machines()
    }
}
