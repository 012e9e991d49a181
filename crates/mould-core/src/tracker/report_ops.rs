//! Report runs for the Tracker.
//!
//! Each method scans the current contents of the store and hands the
//! snapshot to [`crate::report`].

use jiff::civil::Date;
use log::debug;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{
        FieldCount, Report, ReportKind, ReportRows, StatusCount, Task, TaskField, TaskStatus,
        Totals, UtilizationRow,
    },
    params::{CountTasks, DateRangeParams},
    report,
};

impl Tracker {
    /// Machine counts per status.
    pub fn machine_status_summary(&self) -> Result<Vec<StatusCount>> {
        Ok(report::status_summary(&self.db.list_machines()?))
    }

    /// Task counts per status.
    pub fn task_status_summary(&self) -> Result<Vec<StatusCount>> {
        Ok(report::status_summary(&self.db.list_tasks()?))
    }

    /// Task counts per `machine_id` or `technician`.
    pub fn count_tasks(&self, params: &CountTasks) -> Result<Vec<FieldCount>> {
        let field: TaskField = params.field.parse()?;
        Ok(report::count_by_field(&self.db.list_tasks()?, field))
    }

    /// Tasks whose status was set to `Overdue`.
    pub fn overdue_tasks(&self) -> Result<Vec<Task>> {
        Ok(report::filter_by_status(&self.db.list_tasks()?, TaskStatus::Overdue))
    }

    /// Tasks with the given status label.
    pub fn tasks_with_status(&self, status: &str) -> Result<Vec<Task>> {
        let status: TaskStatus = status.parse()?;
        Ok(report::filter_by_status(&self.db.list_tasks()?, status))
    }

    /// Tasks with the given status label due within the range.
    pub fn tasks_with_status_in_range(
        &self,
        status: &str,
        params: &DateRangeParams,
    ) -> Result<Vec<Task>> {
        let status: TaskStatus = status.parse()?;
        let range = params.to_range()?;
        Ok(report::filter_by_status_and_date_range(
            &self.db.list_tasks()?,
            status,
            &range,
        ))
    }

    /// Completed tasks due within the range.
    pub fn completed_tasks(&self, params: &DateRangeParams) -> Result<Vec<Task>> {
        let range = params.to_range()?;
        Ok(report::completed_in_range(&self.db.list_tasks()?, &range))
    }

    /// Per-machine task counts for every status except `Overdue`.
    pub fn machine_utilization(&self) -> Result<Vec<UtilizationRow>> {
        Ok(report::utilization_by_machine_and_status(&self.db.list_tasks()?))
    }

    /// Unfinished tasks due before `today`.
    pub fn past_due_tasks(&self, today: Date) -> Result<Vec<Task>> {
        Ok(report::past_due(&self.db.list_tasks()?, today))
    }

    /// Record totals for the three collections.
    pub fn totals(&self) -> Result<Totals> {
        self.db.counts()
    }

    /// Runs a named report.
    ///
    /// `range` is required by [`ReportKind::CompletedByDateRange`]; `today`
    /// is used by [`ReportKind::PastDue`].
    pub fn run_report(
        &self,
        kind: ReportKind,
        range: Option<&DateRangeParams>,
        today: Date,
    ) -> Result<Report> {
        debug!("Running report {}", kind.as_str());
        let rows = match kind {
            ReportKind::MachineStatus => ReportRows::Statuses(self.machine_status_summary()?),
            ReportKind::TaskStatus => ReportRows::Statuses(self.task_status_summary()?),
            ReportKind::TasksByMachine => ReportRows::Fields(report::count_by_field(
                &self.db.list_tasks()?,
                TaskField::MachineId,
            )),
            ReportKind::TasksByTechnician => ReportRows::Fields(report::count_by_field(
                &self.db.list_tasks()?,
                TaskField::Technician,
            )),
            ReportKind::OverdueTasks => ReportRows::Tasks(self.overdue_tasks()?),
            ReportKind::CompletedByDateRange => {
                let range = range.ok_or_else(|| {
                    TrackerError::invalid_input("start_date")
                        .with_reason("a date range is required for this report")
                })?;
                ReportRows::Tasks(self.completed_tasks(range)?)
            }
            ReportKind::MachineUtilization => ReportRows::Utilization(self.machine_utilization()?),
            ReportKind::PastDue => ReportRows::Tasks(self.past_due_tasks(today)?),
        };

        Ok(Report::new(kind, rows))
    }
}
