//! Ready-order keys and the ready heap.
//!
//! The non-preemptive shortest-job policies admit arrived processes into a
//! [`ReadyHeap`] keyed by a [`ReadyKey`], then dispatch the smallest key.
//!
//! # Usage
//!
//! ```
//! use u_procsim::dispatching::{rules, ReadyHeap, ReadyKey};
//! use u_procsim::models::Process;
//!
//! let p = Process::new(1, 0, 4);
//! let mut heap = ReadyHeap::new();
//! heap.push(p.clone(), rules::ShortestBurst.key(&p).unwrap());
//! assert_eq!(heap.len(), 1);
//! ```

mod heap;
pub mod rules;

pub use heap::ReadyHeap;

use crate::error::ScheduleError;
use crate::models::Process;
use std::fmt::Debug;

/// Computes the ready-heap key of a process.
///
/// # Key Convention
/// **Lower key = dispatched first.**
pub trait ReadyKey: Send + Sync + Debug {
    /// Key name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Ready-heap key for the process.
    ///
    /// # Errors
    /// [`ScheduleError::ZeroBurstDuration`] when the process has no burst.
    fn key(&self, process: &Process) -> Result<i64, ScheduleError>;

    /// Key description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
