//! Record store: SQLite persistence for machines, tasks and schedules.
//!
//! This module owns the single database connection used by the tracker. Each
//! entity kind has its own query module offering insert, replace, delete,
//! lookup and a full scan. Every write runs in its own transaction and is
//! committed before returning.

use std::path::Path;

use log::info;
use rusqlite::{types::Type, Connection};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::Totals,
};

pub mod machine_queries;
pub mod schedule_queries;
pub mod schema;
pub mod task_queries;

const COUNT_MACHINES_SQL: &str = "SELECT COUNT(*) FROM machines";
const COUNT_TASKS_SQL: &str = "SELECT COUNT(*) FROM tasks";
const COUNT_SCHEDULES_SQL: &str = "SELECT COUNT(*) FROM schedules";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) a database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path.as_ref())
            .db_context("Failed to open database connection")?;
        info!("Opened database at {}", path.as_ref().display());

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a transient in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Closes the connection, reporting any error raised while flushing.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| TrackerError::database("Failed to close database").with_source(e))?;
        info!("Closed database");
        Ok(())
    }

    /// Counts the records in each collection.
    pub fn counts(&self) -> Result<Totals> {
        let count = |sql: &str| -> Result<usize> {
            self.connection
                .query_row(sql, [], |row| row.get::<_, i64>(0))
                .map(|n| n as usize)
                .db_context("Failed to count records")
        };

        Ok(Totals {
            machines: count(COUNT_MACHINES_SQL)?,
            tasks: count(COUNT_TASKS_SQL)?,
            schedules: count(COUNT_SCHEDULES_SQL)?,
        })
    }
}

/// Converts a validation failure on a stored column into a row error.
pub(crate) fn column_error(column: usize, error: TrackerError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(error))
}
