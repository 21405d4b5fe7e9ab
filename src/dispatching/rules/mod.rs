//! Built-in ready-order keys.
//!
//! # Key Convention
//! All keys are integers; the ready heap dispatches the smallest key first.

use super::ReadyKey;
use crate::error::ScheduleError;
use crate::models::Process;

/// Shortest burst first.
///
/// The key is the burst duration itself. Minimizes average wait on a
/// single processor when all jobs are available together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl ReadyKey for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> Result<i64, ScheduleError> {
        if process.burst_duration <= 0 {
            return Err(ScheduleError::ZeroBurstDuration { id: process.id });
        }
        Ok(process.burst_duration)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Integer inverse of the burst duration: `1 / burst`.
///
/// Integer division makes the key 1 for a burst of 1 and 0 for every
/// longer burst. With smallest-key-first dispatch, every ready process
/// with a burst of 2 or more runs before a ready process with a burst of
/// 1, and the rest is decided by the heap's insertion-order tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseBurst;

impl ReadyKey for InverseBurst {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> Result<i64, ScheduleError> {
        if process.burst_duration <= 0 {
            return Err(ScheduleError::ZeroBurstDuration { id: process.id });
        }
        Ok(1 / process.burst_duration)
    }

    fn description(&self) -> &'static str {
        "Inverse Burst Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst_key() {
        let p = Process::new(1, 0, 7);
        assert_eq!(ShortestBurst.key(&p), Ok(7));
        assert_eq!(ShortestBurst.name(), "SJF");
    }

    #[test]
    fn test_inverse_burst_is_degenerate() {
        let keys: Vec<i64> = [1, 2, 3]
            .iter()
            .map(|&burst| InverseBurst.key(&Process::new(1, 0, burst)).unwrap())
            .collect();
        assert_eq!(keys, vec![1, 0, 0]);
        assert_eq!(InverseBurst.key(&Process::new(1, 0, 1000)), Ok(0));
    }

    #[test]
    fn test_zero_burst_rejected() {
        let p = Process::new(9, 0, 0);
        assert_eq!(
            InverseBurst.key(&p),
            Err(ScheduleError::ZeroBurstDuration { id: 9 })
        );
        assert_eq!(
            ShortestBurst.key(&p),
            Err(ScheduleError::ZeroBurstDuration { id: 9 })
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(InverseBurst.description(), "Inverse Burst Priority");
    }
}
