//! Schedule operations and queries.
//!
//! Schedules can be added, removed and listed. There is no replace
//! operation: a schedule is changed by deleting it and adding it again.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::column_error;
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{
        calendar::{format_time, parse_time},
        Schedule,
    },
};

const ENTITY: &str = "Schedule";

const INSERT_SCHEDULE_SQL: &str = "INSERT INTO schedules (schedule_id, task_id, start_time, end_time) VALUES (?1, ?2, ?3, ?4)";
const DELETE_SCHEDULE_SQL: &str = "DELETE FROM schedules WHERE schedule_id = ?1";
const SELECT_SCHEDULE_SQL: &str =
    "SELECT schedule_id, task_id, start_time, end_time FROM schedules WHERE schedule_id = ?1";
const LIST_SCHEDULES_SQL: &str =
    "SELECT schedule_id, task_id, start_time, end_time FROM schedules ORDER BY rowid";
const CHECK_SCHEDULE_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM schedules WHERE schedule_id = ?1)";

fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    let start_time: String = row.get(2)?;
    let end_time: String = row.get(3)?;
    Ok(Schedule {
        schedule_id: row.get(0)?,
        task_id: row.get(1)?,
        start_time: parse_time("start_time", &start_time).map_err(|e| column_error(2, e))?,
        end_time: parse_time("end_time", &end_time).map_err(|e| column_error(3, e))?,
    })
}

impl super::Database {
    /// Adds a new schedule. Fails with `DuplicateKey` if the id is taken.
    ///
    /// Neither the task reference nor the order of start and end is checked.
    pub fn insert_schedule(&mut self, schedule: &Schedule) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(
                CHECK_SCHEDULE_EXISTS_SQL,
                params![schedule.schedule_id],
                |row| row.get(0),
            )
            .db_context("Failed to check schedule existence")?;
        if exists {
            return Err(TrackerError::duplicate(ENTITY, &schedule.schedule_id));
        }

        tx.execute(
            INSERT_SCHEDULE_SQL,
            params![
                schedule.schedule_id,
                schedule.task_id,
                format_time(schedule.start_time),
                format_time(schedule.end_time)
            ],
        )
        .db_context("Failed to insert schedule")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Inserted schedule {} for task {}", schedule.schedule_id, schedule.task_id);
        Ok(())
    }

    /// Deletes a schedule by id. Returns `false` when no schedule had the id.
    pub fn delete_schedule(&mut self, schedule_id: &str) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_SCHEDULE_SQL, params![schedule_id])
            .db_context("Failed to delete schedule")?;

        debug!("Deleted schedule {schedule_id} ({rows_affected} rows)");
        Ok(rows_affected > 0)
    }

    /// Retrieves a schedule by its id.
    pub fn get_schedule(&self, schedule_id: &str) -> Result<Option<Schedule>> {
        self.connection
            .query_row(SELECT_SCHEDULE_SQL, params![schedule_id], schedule_from_row)
            .optional()
            .db_context("Failed to query schedule")
    }

    /// Lists every schedule in insertion order.
    pub fn list_schedules(&self) -> Result<Vec<Schedule>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SCHEDULES_SQL)
            .db_context("Failed to prepare query")?;

        let schedules = stmt
            .query_map([], schedule_from_row)
            .db_context("Failed to query schedules")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch schedules")?;

        Ok(schedules)
    }
}
