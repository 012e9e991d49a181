//! Display implementations for domain models.
//!
//! Records render as markdown with a heading and a metadata list, the same
//! way whether shown on their own or after a create or update.

use std::fmt;

use crate::models::{
    calendar::{format_date, format_time},
    Machine, MachineStatus, Schedule, Task, TaskStatus, Totals,
};

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.machine_id, self.machine_name)?;
        writeln!(f)?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Status: {}", self.status)?;
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.task_id, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- Machine: {}", self.machine_id)?;
        writeln!(f, "- Technician: {}", self.technician)?;
        writeln!(f, "- Due: {}", format_date(self.due_date))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. Task {}", self.schedule_id, self.task_id)?;
        writeln!(f)?;
        writeln!(f, "- Start: {}", format_time(self.start_time))?;
        writeln!(f, "- End: {}", format_time(self.end_time))?;
        Ok(())
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Overview")?;
        writeln!(f)?;
        writeln!(f, "- **Total Machines**: {}", self.machines)?;
        writeln!(f, "- **Total Tasks**: {}", self.tasks)?;
        writeln!(f, "- **Total Schedules**: {}", self.schedules)?;
        Ok(())
    }
}
