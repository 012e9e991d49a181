//! Task operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::Task,
    params::{EditTask, Id, TaskFields},
};

impl Tracker {
    /// Adds a task from raw fields. The machine id is stored as given.
    pub fn add_task(&mut self, fields: &TaskFields) -> Result<Task> {
        let task = Task::try_from(fields)?;
        self.db.insert_task(&task)?;
        Ok(task)
    }

    /// Replaces every non-id field of an existing task.
    pub fn replace_task(&mut self, fields: &TaskFields) -> Result<Task> {
        let task = Task::try_from(fields)?;
        self.db.replace_task(&task)?;
        Ok(task)
    }

    /// Loads a task, overlays the given fields and saves it back.
    pub fn edit_task(&mut self, edit: &EditTask) -> Result<Task> {
        let stored = self.show_task(&Id {
            id: edit.task_id.clone(),
        })?;
        let task = edit.apply_to(stored)?;
        self.db.replace_task(&task)?;
        Ok(task)
    }

    /// Deletes a task. Schedules pointing at it are kept.
    pub fn delete_task(&mut self, params: &Id) -> Result<bool> {
        self.db.delete_task(&params.id)
    }

    /// Retrieves a task, failing with `NotFound` if it does not exist.
    pub fn show_task(&self, params: &Id) -> Result<Task> {
        self.db
            .get_task(&params.id)?
            .ok_or_else(|| TrackerError::not_found("Task", &params.id))
    }

    /// Lists all tasks in insertion order.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.db.list_tasks()
    }
}
