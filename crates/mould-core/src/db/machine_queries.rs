//! Machine CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::column_error;
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Machine, MachineStatus},
};

const ENTITY: &str = "Machine";

const INSERT_MACHINE_SQL: &str =
    "INSERT INTO machines (machine_id, machine_name, location, status) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_MACHINE_SQL: &str =
    "UPDATE machines SET machine_name = ?1, location = ?2, status = ?3 WHERE machine_id = ?4";
const DELETE_MACHINE_SQL: &str = "DELETE FROM machines WHERE machine_id = ?1";
const SELECT_MACHINE_SQL: &str =
    "SELECT machine_id, machine_name, location, status FROM machines WHERE machine_id = ?1";
const LIST_MACHINES_SQL: &str =
    "SELECT machine_id, machine_name, location, status FROM machines ORDER BY rowid";
const CHECK_MACHINE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM machines WHERE machine_id = ?1)";

/// Maps a `machines` row, validating the stored status label.
fn machine_from_row(row: &Row<'_>) -> rusqlite::Result<Machine> {
    let status: String = row.get(3)?;
    Ok(Machine {
        machine_id: row.get(0)?,
        machine_name: row.get(1)?,
        location: row.get(2)?,
        status: status
            .parse::<MachineStatus>()
            .map_err(|e| column_error(3, e))?,
    })
}

impl super::Database {
    /// Adds a new machine. Fails with `DuplicateKey` if the id is taken.
    pub fn insert_machine(&mut self, machine: &Machine) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_MACHINE_EXISTS_SQL, params![machine.machine_id], |row| {
                row.get(0)
            })
            .db_context("Failed to check machine existence")?;
        if exists {
            return Err(TrackerError::duplicate(ENTITY, &machine.machine_id));
        }

        tx.execute(
            INSERT_MACHINE_SQL,
            params![
                machine.machine_id,
                machine.machine_name,
                machine.location,
                machine.status.as_str()
            ],
        )
        .db_context("Failed to insert machine")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Inserted machine {}", machine.machine_id);
        Ok(())
    }

    /// Replaces every non-id field of an existing machine. Fails with
    /// `NotFound` if no machine has the id.
    pub fn replace_machine(&mut self, machine: &Machine) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_MACHINE_SQL,
                params![
                    machine.machine_name,
                    machine.location,
                    machine.status.as_str(),
                    machine.machine_id
                ],
            )
            .db_context("Failed to update machine")?;

        if rows_affected == 0 {
            return Err(TrackerError::not_found(ENTITY, &machine.machine_id));
        }

        debug!("Replaced machine {}", machine.machine_id);
        Ok(())
    }

    /// Deletes a machine by id. Tasks referring to it are left untouched.
    ///
    /// Returns `false` when no machine had the id; that is not an error.
    pub fn delete_machine(&mut self, machine_id: &str) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_MACHINE_SQL, params![machine_id])
            .db_context("Failed to delete machine")?;

        debug!("Deleted machine {machine_id} ({rows_affected} rows)");
        Ok(rows_affected > 0)
    }

    /// Retrieves a machine by its id.
    pub fn get_machine(&self, machine_id: &str) -> Result<Option<Machine>> {
        self.connection
            .query_row(SELECT_MACHINE_SQL, params![machine_id], machine_from_row)
            .optional()
            .db_context("Failed to query machine")
    }

    /// Lists every machine in insertion order.
    pub fn list_machines(&self) -> Result<Vec<Machine>> {
        let mut stmt = self
            .connection
            .prepare(LIST_MACHINES_SQL)
            .db_context("Failed to prepare query")?;

        let machines = stmt
            .query_map([], machine_from_row)
            .db_context("Failed to query machines")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch machines")?;

        Ok(machines)
    }
}
