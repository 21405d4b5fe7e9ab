//! Schedule (simulation result) model.
//!
//! A schedule is what one policy produces for one batch: the Gantt trace of
//! execution intervals, the per-process table rows, and the aggregate
//! metrics accumulated while dispatching.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::scheduler::{ProcessSummary, ScheduleMetrics};

/// A contiguous span during which one process held the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub process_id: u64,
    /// First time unit of the span.
    pub start: i64,
    /// Time unit at which the span ended.
    pub stop: i64,
}

/// One line of the schedule table.
///
/// For non-preemptive policies `burst` and `arrival` are the process's own
/// figures. For round-robin they are the dispatch's time slice and start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub id: u64,
    pub priority: i64,
    pub burst: i64,
    pub arrival: i64,
    pub wait: i64,
    pub turnaround: i64,
    pub completion: i64,
}

/// The complete output of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Title used by report rendering (the policy's display name).
    pub title: String,
    /// Execution intervals in dispatch order.
    pub trace: Vec<ExecutionInterval>,
    /// Table rows.
    pub rows: Vec<ScheduleRow>,
    /// Aggregate figures. `None` when there was nothing to schedule.
    pub metrics: Option<ScheduleMetrics>,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: u64, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the span.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

impl Schedule {
    /// Creates an empty schedule with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Number of dispatches (trace intervals).
    pub fn dispatch_count(&self) -> usize {
        self.trace.len()
    }

    /// Latest stop time across the trace.
    pub fn makespan(&self) -> i64 {
        self.trace.iter().map(|i| i.stop).max().unwrap_or(0)
    }

    /// All intervals of one process, in dispatch order.
    pub fn intervals_for(&self, process_id: u64) -> Vec<&ExecutionInterval> {
        self.trace
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Stop time of the process's last interval.
    pub fn completion_time(&self, process_id: u64) -> Option<i64> {
        self.intervals_for(process_id).iter().map(|i| i.stop).max()
    }

    /// Total processor time the process received.
    pub fn service_received(&self, process_id: u64) -> i64 {
        self.intervals_for(process_id)
            .iter()
            .map(|i| i.duration())
            .sum()
    }

    /// Table row for a process id (the first one, if several).
    pub fn row_for(&self, id: u64) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Cumulative per-process figures derived from the trace.
    ///
    /// Unlike the table rows, these span every dispatch of a process, so
    /// they are comparable across preemptive and non-preemptive policies.
    /// Processes that never ran are skipped.
    pub fn process_summaries(&self, processes: &[Process]) -> Vec<ProcessSummary> {
        processes
            .iter()
            .filter_map(|p| {
                self.completion_time(p.id)
                    .map(|completion| ProcessSummary::new(p, completion))
            })
            .collect()
    }
}
