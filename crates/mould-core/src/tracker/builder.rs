//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
};

/// Where the tracker keeps its records.
#[derive(Debug, Clone)]
enum Location {
    Default,
    File(PathBuf),
    Memory,
}

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    location: Location,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            location: Location::Default,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/mould/maintenance.db` or
    /// `~/.local/share/mould/maintenance.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.location = Location::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps all records in memory; nothing survives [`Tracker::close`].
    pub fn in_memory(mut self) -> Self {
        self.location = Location::Memory;
        self
    }

    /// Opens the store and builds the tracker.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::XdgDirectory` if no default path can be placed
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `TrackerError::Database` if database initialization fails
    pub fn build(self) -> Result<Tracker> {
        let db = match self.location {
            Location::Memory => Database::open_in_memory()?,
            Location::File(path) => Self::open_file(&path)?,
            Location::Default => Self::open_file(&Self::default_database_path()?)?,
        };

        Ok(Tracker::new(db))
    }

    fn open_file(path: &Path) -> Result<Database> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening maintenance database at {}", path.display());
        Database::new(path)
    }

    /// Returns the default database path under the XDG data directory.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("mould")
            .place_data_file("maintenance.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
