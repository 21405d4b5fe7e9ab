//! Trace and metric accumulation shared by all policies.

use log::{debug, info};

use super::ScheduleMetrics;
use crate::error::ScheduleError;
use crate::models::{ExecutionInterval, Schedule, ScheduleRow};

/// Accumulates dispatches into a [`Schedule`].
///
/// Every dispatch adds an interval to the trace and its wait/turnaround to
/// the running totals. Rows are added separately because round-robin
/// overwrites its table instead of appending.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    schedule: Schedule,
    process_count: usize,
    total_wait: i64,
    total_turnaround: i64,
    last_completion: i64,
}

impl ScheduleBuilder {
    /// Starts a schedule for a batch of `process_count` processes.
    pub fn new(title: impl Into<String>, process_count: usize) -> Self {
        Self {
            schedule: Schedule::new(title),
            process_count,
            total_wait: 0,
            total_turnaround: 0,
            last_completion: 0,
        }
    }

    /// Records one dispatch: the interval plus the row's timing figures.
    ///
    /// # Errors
    /// [`ScheduleError::MetricOverflow`] when a running total leaves `i64`.
    pub fn dispatch(
        &mut self,
        interval: ExecutionInterval,
        row: &ScheduleRow,
    ) -> Result<(), ScheduleError> {
        debug!(
            "{}: pid {} runs [{}, {}) wait={} turnaround={}",
            self.schedule.title, interval.process_id, interval.start, interval.stop, row.wait,
            row.turnaround
        );
        let overflow = || ScheduleError::MetricOverflow {
            title: self.schedule.title.clone(),
        };
        let total_wait = self.total_wait.checked_add(row.wait).ok_or_else(overflow)?;
        let total_turnaround = self
            .total_turnaround
            .checked_add(row.turnaround)
            .ok_or_else(overflow)?;

        self.total_wait = total_wait;
        self.total_turnaround = total_turnaround;
        self.last_completion = row.completion;
        self.schedule.trace.push(interval);
        Ok(())
    }

    /// Appends a table row.
    pub fn push_row(&mut self, row: ScheduleRow) {
        self.schedule.rows.push(row);
    }

    /// Replaces the table rows.
    pub fn set_rows(&mut self, rows: Vec<ScheduleRow>) {
        self.schedule.rows = rows;
    }

    /// Current trace length.
    pub fn dispatch_count(&self) -> usize {
        self.schedule.trace.len()
    }

    /// Computes the aggregate metrics and returns the schedule.
    pub fn finish(mut self) -> Schedule {
        self.schedule.metrics = ScheduleMetrics::from_totals(
            self.process_count,
            self.total_wait,
            self.total_turnaround,
            self.last_completion,
        );
        info!(
            "{}: {} processes, {} dispatches, makespan {}",
            self.schedule.title,
            self.process_count,
            self.schedule.trace.len(),
            self.schedule.makespan()
        );
        self.schedule
    }
}
