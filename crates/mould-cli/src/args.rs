use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{MachineCommands, ReportArgs, ScheduleCommands, TaskCommands};

/// Maintenance tracker for injection-moulding machines
///
/// Keeps machines, maintenance tasks and task schedules in a local SQLite
/// database and prints operational reports over them. Running `mould`
/// without a command prints record totals.
#[derive(Parser)]
#[command(version, about, name = "mould")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/mould/maintenance.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the mould CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage machines
    #[command(alias = "m")]
    Machine {
        #[command(subcommand)]
        command: MachineCommands,
    },
    /// Manage maintenance tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage task schedules
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Run a report
    #[command(alias = "r")]
    Report(ReportArgs),
    /// Show record totals
    Totals,
}
