//! Scheduling policies and schedule metrics.
//!
//! Every policy consumes the full batch and produces a [`Schedule`]: the
//! Gantt trace, the table rows and the aggregate metrics. Policies are
//! independent of each other and never mutate their input.
//!
//! # Policies
//!
//! | Policy | Preemptive | Ready order |
//! |--------|-----------|-------------|
//! | [`Fcfs`] | no | input order |
//! | [`ShortestJobFirst::shortest_burst`] | no | burst duration |
//! | [`ShortestJobFirst::inverse_burst`] | no | `1 / burst` |
//! | [`RoundRobin`] | yes, quantum 1 | FIFO |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod builder;
mod fcfs;
mod kpi;
mod round_robin;
mod sjf;

pub use builder::ScheduleBuilder;
pub use fcfs::{Fcfs, WaitRule};
pub use kpi::{ProcessSummary, ScheduleMetrics};
pub use round_robin::{RoundRobin, RowMode, QUANTUM};
pub use sjf::ShortestJobFirst;

use std::fmt::Debug;

use crate::error::ScheduleError;
use crate::models::{Process, Schedule};

/// A single-processor scheduling policy.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Display title used in reports.
    fn title(&self) -> &str;

    /// Runs the policy over the whole batch.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] when the batch fails validation.
    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError>;
}
