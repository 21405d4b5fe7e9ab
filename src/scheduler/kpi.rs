//! Schedule quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | Σ per-dispatch wait / process count |
//! | Average turnaround | Σ per-dispatch turnaround / process count |
//! | Throughput | process count / completion of the last dispatch |
//!
//! Sums run over dispatches, not processes: under round-robin a process
//! contributes once per time slice while the divisor stays the number of
//! processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Aggregate figures of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of processes in the batch.
    pub process_count: usize,
    /// Sum of per-dispatch waits.
    pub total_wait: i64,
    /// Sum of per-dispatch turnarounds.
    pub total_turnaround: i64,
    /// Completion time of the last dispatch processed.
    pub last_completion: i64,
    /// `total_wait / process_count`.
    pub average_wait: f64,
    /// `total_turnaround / process_count`.
    pub average_turnaround: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Derives the averages from accumulated totals.
    ///
    /// Returns `None` when there is no data: an empty batch, or a last
    /// completion at or before t=0.
    pub fn from_totals(
        process_count: usize,
        total_wait: i64,
        total_turnaround: i64,
        last_completion: i64,
    ) -> Option<Self> {
        if process_count == 0 || last_completion <= 0 {
            return None;
        }
        let count = process_count as f64;
        Some(Self {
            process_count,
            total_wait,
            total_turnaround,
            last_completion,
            average_wait: total_wait as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            throughput: count / last_completion as f64,
        })
    }
}

/// Cumulative figures for one process across all of its dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    pub id: u64,
    pub arrival: i64,
    pub burst: i64,
    /// Stop time of the last interval.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`: total time spent ready but not running.
    pub wait: i64,
}

impl ProcessSummary {
    /// Builds a summary from a process and its final completion time.
    pub fn new(process: &Process, completion: i64) -> Self {
        let turnaround = completion - process.arrival_time;
        Self {
            id: process.id,
            arrival: process.arrival_time,
            burst: process.burst_duration,
            completion,
            turnaround,
            wait: turnaround - process.burst_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_basic() {
        // FCFS on [{0,5},{0,3}]: waits 0 and 5, turnarounds 5 and 8, ends at 8
        let m = ScheduleMetrics::from_totals(2, 5, 13, 8).unwrap();
        assert!((m.average_wait - 2.5).abs() < 1e-10);
        assert!((m.average_turnaround - 6.5).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_single_process_throughput() {
        let m = ScheduleMetrics::from_totals(1, 0, 5, 5).unwrap();
        assert!((m.throughput - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_no_data() {
        assert!(ScheduleMetrics::from_totals(0, 0, 0, 0).is_none());
        assert!(ScheduleMetrics::from_totals(3, 0, 0, 0).is_none());
    }

    #[test]
    fn test_process_summary() {
        let p = Process::new(1, 2, 3);
        let s = ProcessSummary::new(&p, 9);
        assert_eq!(s.turnaround, 7);
        assert_eq!(s.wait, 4);
        assert_eq!(s.completion, s.arrival + s.wait + s.burst);
    }
}
