//! Preemptive round-robin with a fixed quantum of one time unit.
//!
//! # Algorithm
//!
//! 1. Stable-sort a view of the batch by arrival time.
//! 2. Admit every process that has arrived by the service clock to the back
//!    of a FIFO ready queue.
//! 3. Pop the front, run it for `min(QUANTUM, remaining)`, and put it back
//!    at the end of the queue if work remains.
//! 4. With nothing ready, jump the clock to the next arrival.
//!
//! Remaining bursts live in working copies; the caller's batch is never
//! written to.
//!
//! # Complexity
//! O(n log n + Σ burst / QUANTUM).

use std::collections::VecDeque;

use log::warn;
use serde::{Deserialize, Serialize};

use super::{ScheduleBuilder, SchedulingPolicy};
use crate::error::ScheduleError;
use crate::models::{is_arrival_ordered, ExecutionInterval, Process, Schedule, ScheduleRow};
use crate::validation::{validate_dense_ids, validate_processes};

/// Time slice granted per dispatch.
pub const QUANTUM: i64 = 1;

/// How dispatches are written to the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowMode {
    /// One row per process at position `id - 1`, overwritten by every
    /// dispatch: the table shows each process's last time slice.
    #[default]
    LastDispatch,
    /// One row per dispatch, in dispatch order.
    PerDispatch,
}

/// A process with its remaining burst.
#[derive(Debug, Clone, Copy)]
struct Runnable<'a> {
    process: &'a Process,
    remaining: i64,
}

/// Round-robin policy.
///
/// # Example
/// ```
/// use u_procsim::models::Process;
/// use u_procsim::scheduler::{RoundRobin, SchedulingPolicy};
///
/// let processes = vec![Process::new(1, 0, 3), Process::new(2, 1, 2)];
/// let schedule = RoundRobin::new().schedule(&processes).unwrap();
/// let order: Vec<u64> = schedule.trace.iter().map(|i| i.process_id).collect();
/// assert_eq!(order, vec![1, 1, 2, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobin {
    row_mode: RowMode,
    title: String,
}

impl RoundRobin {
    /// Creates the policy with [`RowMode::LastDispatch`].
    pub fn new() -> Self {
        Self {
            row_mode: RowMode::default(),
            title: "Round-robin".to_string(),
        }
    }

    /// Sets the row mode.
    pub fn with_row_mode(mut self, row_mode: RowMode) -> Self {
        self.row_mode = row_mode;
        self
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The configured row mode.
    pub fn row_mode(&self) -> RowMode {
        self.row_mode
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for RoundRobin {
    fn title(&self) -> &str {
        &self.title
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        validate_processes(processes)?;
        validate_dense_ids(processes)?;
        if !is_arrival_ordered(processes) {
            warn!("{}: input is not sorted by arrival, sorting", self.title);
        }

        let mut arrivals: Vec<&Process> = processes.iter().collect();
        arrivals.sort_by_key(|p| p.arrival_time);

        let count = arrivals.len();
        let mut builder = ScheduleBuilder::new(&self.title, count);
        let mut table: Vec<Option<ScheduleRow>> = vec![None; count];
        let mut ready: VecDeque<Runnable<'_>> = VecDeque::with_capacity(count);
        let mut admitted = 0;
        let mut service_time: i64 = 0;

        while !ready.is_empty() || admitted < count {
            while let Some(&p) = arrivals.get(admitted) {
                if p.arrival_time > service_time {
                    break;
                }
                ready.push_back(Runnable {
                    process: p,
                    remaining: p.burst_duration,
                });
                admitted += 1;
            }

            let Some(mut current) = ready.pop_front() else {
                let Some(next) = arrivals.get(admitted) else {
                    break;
                };
                warn!(
                    "{}: processor idle from {} to {}",
                    self.title, service_time, next.arrival_time
                );
                service_time = next.arrival_time;
                continue;
            };
            let p = current.process;

            let time_slice = QUANTUM.min(current.remaining);
            let start = service_time.max(p.arrival_time);
            let wait = (start - p.arrival_time).max(0);
            let turnaround = time_slice + wait;
            let completion = start + time_slice;

            let row = ScheduleRow {
                id: p.id,
                priority: p.priority,
                burst: time_slice,
                arrival: start,
                wait,
                turnaround,
                completion,
            };
            builder.dispatch(ExecutionInterval::new(p.id, start, completion), &row)?;

            match self.row_mode {
                RowMode::LastDispatch => {
                    let slot = p
                        .id
                        .checked_sub(1)
                        .and_then(|idx| usize::try_from(idx).ok())
                        .and_then(|idx| table.get_mut(idx))
                        .ok_or(ScheduleError::ProcessIdOutOfRange { id: p.id, count })?;
                    *slot = Some(row);
                }
                RowMode::PerDispatch => builder.push_row(row),
            }

            current.remaining -= time_slice;
            if current.remaining > 0 {
                ready.push_back(current);
            }
            service_time = completion;
        }

        if self.row_mode == RowMode::LastDispatch {
            builder.set_rows(table.into_iter().flatten().collect());
        }
        Ok(builder.finish())
    }
}
