//! Simulation domain models.
//!
//! Provides the input descriptor (`Process`) and the result types produced
//! by every policy (`Schedule`, `ExecutionInterval`, `ScheduleRow`).
//!
//! # Domain Mappings
//!
//! | u-procsim | Operating system | Batch queue |
//! |-----------|------------------|-------------|
//! | Process | PCB | Job |
//! | ExecutionInterval | Context-switch span | Run slot |
//! | Schedule | Dispatch log | Execution plan |

mod process;
mod schedule;

pub use process::{is_arrival_ordered, Process};
pub use schedule::{ExecutionInterval, Schedule, ScheduleRow};
