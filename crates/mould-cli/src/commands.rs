//! Command-line argument definitions using clap
//!
//! Every argument struct here converts into a plain parameter type from
//! `mould_core::params`, so clap attributes never leak into the core:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! Status, date and time values are passed through as strings. The core
//! validates them and reports the offending field when they are malformed.

use clap::{Args, Subcommand};
use mould_core::params::*;

// ============================================================================
// Machines
// ============================================================================

/// Register a new machine
#[derive(Args)]
pub struct AddMachineArgs {
    /// Unique machine identifier
    pub machine_id: String,
    /// Human-readable machine name
    #[arg(short, long, default_value = "")]
    pub name: String,
    /// Where the machine is installed
    #[arg(short, long, default_value = "")]
    pub location: String,
    #[arg(
        short,
        long,
        default_value = "Operational",
        help = "Machine status (Operational, Under Maintenance, Out of Service)"
    )]
    pub status: String,
}

impl From<AddMachineArgs> for MachineFields {
    fn from(val: AddMachineArgs) -> Self {
        MachineFields {
            machine_id: val.machine_id,
            machine_name: val.name,
            location: val.location,
            status: val.status,
        }
    }
}

/// Change fields of an existing machine
///
/// Loads the stored machine, overlays the given options and saves it back.
/// Options that are left out keep their stored values.
#[derive(Args)]
pub struct EditMachineArgs {
    #[arg(help = "Identifier of the machine to edit")]
    pub machine_id: String,
    #[arg(short, long, help = "New machine name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New location")]
    pub location: Option<String>,
    #[arg(
        short,
        long,
        help = "New status (Operational, Under Maintenance, Out of Service)"
    )]
    pub status: Option<String>,
}

impl From<EditMachineArgs> for EditMachine {
    fn from(val: EditMachineArgs) -> Self {
        EditMachine {
            machine_id: val.machine_id,
            machine_name: val.name,
            location: val.location,
            status: val.status,
        }
    }
}

#[derive(Subcommand)]
pub enum MachineCommands {
    /// Register a new machine
    #[command(alias = "a")]
    Add(AddMachineArgs),
    /// Change fields of an existing machine
    #[command(alias = "e")]
    Edit(EditMachineArgs),
    /// Delete a machine (its tasks are kept)
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// List all machines
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show a single machine
    #[command(alias = "s")]
    Show(IdArgs),
}

// ============================================================================
// Tasks
// ============================================================================

/// Create a maintenance task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Unique task identifier
    pub task_id: String,
    #[arg(short, long, help = "Machine the task is for")]
    pub machine: String,
    #[arg(short, long, help = "Technician assigned to the task")]
    pub technician: String,
    #[arg(long, help = "Due date as YYYY-MM-DD")]
    pub due: String,
    #[arg(short, long, default_value = "", help = "What needs to be done")]
    pub description: String,
    #[arg(
        short,
        long,
        default_value = "Pending",
        help = "Task status (Pending, In Progress, Completed, Overdue)"
    )]
    pub status: String,
}

impl From<AddTaskArgs> for TaskFields {
    fn from(val: AddTaskArgs) -> Self {
        TaskFields {
            task_id: val.task_id,
            machine_id: val.machine,
            description: val.description,
            technician: val.technician,
            due_date: val.due,
            status: val.status,
        }
    }
}

/// Change fields of an existing task
///
/// Loads the stored task, overlays the given options and saves it back.
#[derive(Args)]
pub struct EditTaskArgs {
    #[arg(help = "Identifier of the task to edit")]
    pub task_id: String,
    #[arg(short, long, help = "Reassign the task to another machine")]
    pub machine: Option<String>,
    #[arg(short, long, help = "Reassign the task to another technician")]
    pub technician: Option<String>,
    #[arg(long, help = "New due date as YYYY-MM-DD")]
    pub due: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(
        short,
        long,
        help = "New status (Pending, In Progress, Completed, Overdue)"
    )]
    pub status: Option<String>,
}

impl From<EditTaskArgs> for EditTask {
    fn from(val: EditTaskArgs) -> Self {
        EditTask {
            task_id: val.task_id,
            machine_id: val.machine,
            description: val.description,
            technician: val.technician,
            due_date: val.due,
            status: val.status,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a maintenance task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Change fields of an existing task
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// List all tasks
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show a single task
    #[command(alias = "s")]
    Show(IdArgs),
}

// ============================================================================
// Schedules
// ============================================================================

/// Book a time window for a task
#[derive(Args)]
pub struct AddScheduleArgs {
    /// Unique schedule identifier
    pub schedule_id: String,
    #[arg(short, long, help = "Task being scheduled")]
    pub task: String,
    #[arg(long, help = "Start time as HH:MM:SS")]
    pub start: String,
    #[arg(long, help = "End time as HH:MM:SS")]
    pub end: String,
}

impl From<AddScheduleArgs> for ScheduleFields {
    fn from(val: AddScheduleArgs) -> Self {
        ScheduleFields {
            schedule_id: val.schedule_id,
            task_id: val.task,
            start_time: val.start,
            end_time: val.end,
        }
    }
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Book a time window for a task
    #[command(alias = "a")]
    Add(AddScheduleArgs),
    /// Delete a schedule
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// List all schedules
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show a single schedule
    #[command(alias = "s")]
    Show(IdArgs),
}

// ============================================================================
// Reports
// ============================================================================

/// Inclusive due-date range for the completed-tasks report
#[derive(Args)]
pub struct DateRangeArgs {
    #[arg(long, help = "First due date included, as YYYY-MM-DD")]
    pub start_date: String,
    #[arg(long, help = "Last due date included, as YYYY-MM-DD")]
    pub end_date: String,
}

impl From<DateRangeArgs> for DateRangeParams {
    fn from(val: DateRangeArgs) -> Self {
        DateRangeParams {
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

#[derive(Args)]
pub struct ReportArgs {
    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: ReportCommands,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Machine count per status
    MachineStatus,
    /// Task count per status
    TaskStatus,
    /// Task count per machine
    ByMachine,
    /// Task count per technician
    ByTechnician,
    /// Tasks whose status is Overdue
    Overdue,
    /// Completed tasks due within a date range
    Completed(DateRangeArgs),
    /// Task count per machine and status
    Utilization,
    /// Unfinished tasks whose due date has passed
    PastDue,
}

// ============================================================================
// Shared
// ============================================================================

#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Identifier of the record")]
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}
