//! Errors raised by the scheduling core.

use std::fmt;

use crate::validation::ValidationError;

/// Errors raised while scheduling a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// `pop` on an empty ready heap.
    EmptyQueuePop,
    /// A ready key was requested for a process with a non-positive burst.
    ZeroBurstDuration {
        /// Offending process.
        id: u64,
    },
    /// A round-robin row position fell outside the table.
    ProcessIdOutOfRange {
        /// Offending process.
        id: u64,
        /// Number of rows in the table.
        count: usize,
    },
    /// The batch failed validation.
    InvalidInput(Vec<ValidationError>),
    /// Summed wait or turnaround no longer fits in `i64`.
    MetricOverflow {
        /// Policy whose totals overflowed.
        title: String,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::EmptyQueuePop => write!(f, "pop from an empty ready queue"),
            ScheduleError::ZeroBurstDuration { id } => {
                write!(f, "process {id} has a non-positive burst duration")
            }
            ScheduleError::ProcessIdOutOfRange { id, count } => {
                write!(f, "process id {id} is outside the table of {count} rows")
            }
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid process batch")?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
            ScheduleError::MetricOverflow { title } => {
                write!(f, "{title}: wait or turnaround totals overflow")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}
