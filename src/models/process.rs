//! Process descriptor model.
//!
//! A process is the unit of work handed to every scheduling policy. It is
//! immutable for the duration of a simulation run: policies read it, and
//! the preemptive policy works on its own copy of the remaining burst.
//!
//! # Time Representation
//! All times are abstract integer time units relative to the simulation
//! epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (1-based).
    pub id: u64,
    /// Time unit at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_duration: i64,
    /// Display priority. Zero when the input record has none.
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: u64, arrival_time: i64, burst_duration: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest possible completion if dispatched on arrival.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_duration
    }
}

/// Whether the batch is ordered by non-decreasing arrival time.
pub fn is_arrival_ordered(processes: &[Process]) -> bool {
    processes
        .windows(2)
        .all(|pair| pair[0].arrival_time <= pair[1].arrival_time)
}
