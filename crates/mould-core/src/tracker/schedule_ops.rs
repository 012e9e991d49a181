//! Schedule operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::Schedule,
    params::{Id, ScheduleFields},
};

impl Tracker {
    /// Adds a schedule from raw fields.
    pub fn add_schedule(&mut self, fields: &ScheduleFields) -> Result<Schedule> {
        let schedule = Schedule::try_from(fields)?;
        self.db.insert_schedule(&schedule)?;
        Ok(schedule)
    }

    /// Deletes a schedule. Returns whether a record was removed.
    pub fn delete_schedule(&mut self, params: &Id) -> Result<bool> {
        self.db.delete_schedule(&params.id)
    }

    /// Retrieves a schedule, failing with `NotFound` if it does not exist.
    pub fn show_schedule(&self, params: &Id) -> Result<Schedule> {
        self.db
            .get_schedule(&params.id)?
            .ok_or_else(|| TrackerError::not_found("Schedule", &params.id))
    }

    /// Lists all schedules in insertion order.
    pub fn list_schedules(&self) -> Result<Vec<Schedule>> {
        self.db.list_schedules()
    }
}
