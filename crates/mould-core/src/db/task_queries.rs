//! Task CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::column_error;
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{
        calendar::{format_date, parse_date},
        Task, TaskStatus,
    },
};

const ENTITY: &str = "Task";

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (task_id, machine_id, description, technician, due_date, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET machine_id = ?1, description = ?2, technician = ?3, due_date = ?4, status = ?5 WHERE task_id = ?6";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE task_id = ?1";
const SELECT_TASK_SQL: &str = "SELECT task_id, machine_id, description, technician, due_date, status FROM tasks WHERE task_id = ?1";
const LIST_TASKS_SQL: &str = "SELECT task_id, machine_id, description, technician, due_date, status FROM tasks ORDER BY rowid";
const CHECK_TASK_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM tasks WHERE task_id = ?1)";

/// Maps a `tasks` row, validating the stored due date and status label.
fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let due_date: String = row.get(4)?;
    let status: String = row.get(5)?;
    Ok(Task {
        task_id: row.get(0)?,
        machine_id: row.get(1)?,
        description: row.get(2)?,
        technician: row.get(3)?,
        due_date: parse_date("due_date", &due_date).map_err(|e| column_error(4, e))?,
        status: status
            .parse::<TaskStatus>()
            .map_err(|e| column_error(5, e))?,
    })
}

impl super::Database {
    /// Adds a new task. Fails with `DuplicateKey` if the id is taken.
    ///
    /// The referenced machine is not required to exist.
    pub fn insert_task(&mut self, task: &Task) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TASK_EXISTS_SQL, params![task.task_id], |row| row.get(0))
            .db_context("Failed to check task existence")?;
        if exists {
            return Err(TrackerError::duplicate(ENTITY, &task.task_id));
        }

        tx.execute(
            INSERT_TASK_SQL,
            params![
                task.task_id,
                task.machine_id,
                task.description,
                task.technician,
                format_date(task.due_date),
                task.status.as_str()
            ],
        )
        .db_context("Failed to insert task")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Inserted task {} for machine {}", task.task_id, task.machine_id);
        Ok(())
    }

    /// Replaces every non-id field of an existing task. Fails with
    /// `NotFound` if no task has the id.
    pub fn replace_task(&mut self, task: &Task) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_TASK_SQL,
                params![
                    task.machine_id,
                    task.description,
                    task.technician,
                    format_date(task.due_date),
                    task.status.as_str(),
                    task.task_id
                ],
            )
            .db_context("Failed to update task")?;

        if rows_affected == 0 {
            return Err(TrackerError::not_found(ENTITY, &task.task_id));
        }

        debug!("Replaced task {}", task.task_id);
        Ok(())
    }

    /// Deletes a task by id. Returns `false` when no task had the id.
    pub fn delete_task(&mut self, task_id: &str) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_TASK_SQL, params![task_id])
            .db_context("Failed to delete task")?;

        debug!("Deleted task {task_id} ({rows_affected} rows)");
        Ok(rows_affected > 0)
    }

    /// Retrieves a task by its id.
    pub fn get_task(&self, task_id: &str) -> Result<Option<Task>> {
        self.connection
            .query_row(SELECT_TASK_SQL, params![task_id], task_from_row)
            .optional()
            .db_context("Failed to query task")
    }

    /// Lists every task in insertion order.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .connection
            .prepare(LIST_TASKS_SQL)
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map([], task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(tasks)
    }
}
