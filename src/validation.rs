//! Input validation for process batches.
//!
//! Checks the structural integrity of a batch before any policy runs.
//! Detects:
//! - Zero or duplicate process IDs
//! - Non-positive burst durations
//! - Negative arrival times
//! - Batches whose latest arrival plus total burst overflows `i64`
//! - Non-dense IDs (round-robin indexes its table by `id - 1`)

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is 0.
    ZeroId,
    /// A burst duration is zero or negative.
    ZeroBurstDuration,
    /// An arrival time is negative.
    NegativeArrival,
    /// IDs are not exactly `1..=n`.
    NonDenseId,
    /// Latest arrival plus total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. No process has ID 0
/// 2. No duplicate IDs
/// 3. Every burst duration is positive
/// 4. No arrival time is negative
/// 5. The [`time_horizon`] fits in `i64`, so no policy clock can overflow
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                "Process ID 0 is not allowed, IDs start at 1",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurstDuration,
                format!(
                    "Process {} has burst duration {}, must be positive",
                    p.id, p.burst_duration
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at negative time {}", p.id, p.arrival_time),
            ));
        }
    }

    if errors.is_empty() && time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst duration exceeds the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest arrival plus the sum of all bursts.
///
/// With non-negative arrivals and positive bursts, no policy's service
/// clock can pass this point. `None` when the sum overflows `i64`.
pub fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst_duration))
}

/// Checks that IDs are exactly `1..=n` in some order.
///
/// Round-robin writes each dispatch into the table at position `id - 1`,
/// which is only well-defined for a dense 1-based numbering.
pub fn validate_dense_ids(processes: &[Process]) -> ValidationResult {
    let n = processes.len() as u64;
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|p| p.id == 0 || p.id > n)
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::NonDenseId,
                format!("Process ID {} is outside 1..={n}", p.id),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
