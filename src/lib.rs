//! Single-processor CPU scheduling simulator.
//!
//! Runs classical scheduling policies over a static batch of processes and
//! reports, per policy, a Gantt-style execution trace, per-process timing
//! rows (wait, turnaround, completion) and aggregate averages plus
//! throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`,
//!   `ScheduleRow`, `Schedule`
//! - **`dispatching`**: The ready heap and its ordering keys
//! - **`scheduler`**: FCFS, SJF, SJF-priority and round-robin, plus metrics
//! - **`validation`**: Batch integrity checks (IDs, bursts, arrivals)
//! - **`simulation`**: Runs several policies over one batch
//! - **`loader`** / **`report`** / **`workload`**: Text input, text output
//!   and seeded random batches
//!
//! # Example
//!
//! ```
//! use u_procsim::models::Process;
//! use u_procsim::scheduler::{RoundRobin, SchedulingPolicy};
//!
//! let processes = vec![Process::new(1, 0, 3), Process::new(2, 1, 2)];
//! let schedule = RoundRobin::new().schedule(&processes).unwrap();
//! assert_eq!(schedule.makespan(), 5);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
