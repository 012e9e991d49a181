//! Command handlers for the mould CLI
//!
//! [`Cli`] owns the tracker and the terminal renderer. Each handler converts
//! clap arguments into core parameters, calls the tracker, and renders the
//! outcome through the core display wrappers (or as JSON when asked).

use anyhow::{Context, Result};
use jiff::Zoned;
use log::debug;
use mould_core::{
    display::{CreateResult, Machines, OperationStatus, Schedules, Tasks, UpdateResult},
    params::{EditMachine, EditTask, Id},
    ReportKind, Tracker,
};

use crate::{
    commands::{MachineCommands, ReportArgs, ReportCommands, ScheduleCommands, TaskCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Closes the tracker, flushing the database.
    pub fn close(self) -> Result<()> {
        self.tracker.close().context("Failed to close database")
    }

    pub fn handle_machine_command(&mut self, command: MachineCommands) -> Result<()> {
        match command {
            MachineCommands::Add(args) => {
                let machine = self
                    .tracker
                    .add_machine(&args.into())
                    .context("Failed to add machine")?;
                self.renderer.render(&CreateResult::new(machine).to_string())
            }
            MachineCommands::Edit(args) => {
                let edit: EditMachine = args.into();
                let changes = describe_changes(&[
                    ("name", &edit.machine_name),
                    ("location", &edit.location),
                    ("status", &edit.status),
                ]);
                let machine = self
                    .tracker
                    .edit_machine(&edit)
                    .with_context(|| format!("Failed to edit machine {}", edit.machine_id))?;
                self.renderer
                    .render(&UpdateResult::with_changes(machine, changes).to_string())
            }
            MachineCommands::Delete(args) => {
                let id: Id = args.into();
                let removed = self
                    .tracker
                    .delete_machine(&id)
                    .context("Failed to delete machine")?;
                self.renderer
                    .render(&OperationStatus::deleted("machine", &id.id, removed).to_string())
            }
            MachineCommands::List(args) => {
                let machines = self
                    .tracker
                    .list_machines()
                    .context("Failed to list machines")?;
                if args.json {
                    return self.renderer.render_json(&machines);
                }
                self.renderer.render(&Machines(machines).to_string())
            }
            MachineCommands::Show(args) => {
                let machine = self
                    .tracker
                    .show_machine(&args.into())
                    .context("Failed to show machine")?;
                let index = machine.status.display_index();
                self.renderer
                    .render(&format!("{machine}- Status index: {index}\n"))
            }
        }
    }

    pub fn handle_task_command(&mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self
                    .tracker
                    .add_task(&args.into())
                    .context("Failed to add task")?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::Edit(args) => {
                let edit: EditTask = args.into();
                let changes = describe_changes(&[
                    ("machine", &edit.machine_id),
                    ("technician", &edit.technician),
                    ("due date", &edit.due_date),
                    ("description", &edit.description),
                    ("status", &edit.status),
                ]);
                let task = self
                    .tracker
                    .edit_task(&edit)
                    .with_context(|| format!("Failed to edit task {}", edit.task_id))?;
                self.renderer
                    .render(&UpdateResult::with_changes(task, changes).to_string())
            }
            TaskCommands::Delete(args) => {
                let id: Id = args.into();
                let removed = self
                    .tracker
                    .delete_task(&id)
                    .context("Failed to delete task")?;
                self.renderer
                    .render(&OperationStatus::deleted("task", &id.id, removed).to_string())
            }
            TaskCommands::List(args) => {
                let tasks = self.tracker.list_tasks().context("Failed to list tasks")?;
                if args.json {
                    return self.renderer.render_json(&tasks);
                }
                self.renderer.render(&Tasks(tasks).to_string())
            }
            TaskCommands::Show(args) => {
                let task = self
                    .tracker
                    .show_task(&args.into())
                    .context("Failed to show task")?;
                let index = task.status.display_index();
                self.renderer.render(&format!("{task}- Status index: {index}\n"))
            }
        }
    }

    pub fn handle_schedule_command(&mut self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Add(args) => {
                let schedule = self
                    .tracker
                    .add_schedule(&args.into())
                    .context("Failed to add schedule")?;
                self.renderer.render(&CreateResult::new(schedule).to_string())
            }
            ScheduleCommands::Delete(args) => {
                let id: Id = args.into();
                let removed = self
                    .tracker
                    .delete_schedule(&id)
                    .context("Failed to delete schedule")?;
                self.renderer
                    .render(&OperationStatus::deleted("schedule", &id.id, removed).to_string())
            }
            ScheduleCommands::List(args) => {
                let schedules = self
                    .tracker
                    .list_schedules()
                    .context("Failed to list schedules")?;
                if args.json {
                    return self.renderer.render_json(&schedules);
                }
                self.renderer.render(&Schedules(schedules).to_string())
            }
            ScheduleCommands::Show(args) => {
                let schedule = self
                    .tracker
                    .show_schedule(&args.into())
                    .context("Failed to show schedule")?;
                self.renderer.render(&schedule.to_string())
            }
        }
    }

    pub fn handle_report_command(&self, args: ReportArgs) -> Result<()> {
        let today = Zoned::now().date();
        let (kind, range) = match args.command {
            ReportCommands::MachineStatus => (ReportKind::MachineStatus, None),
            ReportCommands::TaskStatus => (ReportKind::TaskStatus, None),
            ReportCommands::ByMachine => (ReportKind::TasksByMachine, None),
            ReportCommands::ByTechnician => (ReportKind::TasksByTechnician, None),
            ReportCommands::Overdue => (ReportKind::OverdueTasks, None),
            ReportCommands::Completed(range) => {
                (ReportKind::CompletedByDateRange, Some(range.into()))
            }
            ReportCommands::Utilization => (ReportKind::MachineUtilization, None),
            ReportCommands::PastDue => (ReportKind::PastDue, None),
        };
        debug!("report {} (today is {today})", kind.as_str());

        let report = self
            .tracker
            .run_report(kind, range.as_ref(), today)
            .with_context(|| format!("Failed to run {} report", kind.as_str()))?;

        if args.json {
            return self.renderer.render_json(&report);
        }
        self.renderer.render(&report.to_string())
    }

    pub fn totals(&self) -> Result<()> {
        let totals = self.tracker.totals().context("Failed to count records")?;
        self.renderer.render(&totals.to_string())
    }
}

/// Lists the options an edit actually set, as `field: value` lines.
fn describe_changes(fields: &[(&str, &Option<String>)]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("{label}: {v}")))
        .collect()
}
