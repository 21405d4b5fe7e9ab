//! First-come, first-served.
//!
//! # Algorithm
//!
//! Processes are served strictly in input order; the batch is expected to
//! be sorted by arrival already and is NOT re-sorted. A running service
//! clock tracks when the processor frees up.
//!
//! # Complexity
//! O(n).

use log::warn;
use serde::{Deserialize, Serialize};

use super::{ScheduleBuilder, SchedulingPolicy};
use crate::error::ScheduleError;
use crate::models::{is_arrival_ordered, ExecutionInterval, Process, Schedule, ScheduleRow};
use crate::validation::validate_processes;

/// How FCFS derives each process's wait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitRule {
    /// `wait = max(0, service_time - arrival)`, recomputed for every
    /// process. Idle gaps advance the service clock.
    #[default]
    Recomputed,
    /// Bit-compatible with the legacy report: `wait = service_time - arrival`
    /// (unclamped) only when `arrival > 0`, otherwise the previous process's
    /// wait is reused. The clock advances by burst only, ignoring idle gaps.
    CarryOver,
}

/// First-come, first-served policy.
///
/// # Example
/// ```
/// use u_procsim::models::Process;
/// use u_procsim::scheduler::{Fcfs, SchedulingPolicy};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
/// let schedule = Fcfs::new().schedule(&processes).unwrap();
///
/// let metrics = schedule.metrics.unwrap();
/// assert!((metrics.average_wait - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Fcfs {
    wait_rule: WaitRule,
    title: String,
}

impl Fcfs {
    /// Creates the policy with the [`WaitRule::Recomputed`] rule.
    pub fn new() -> Self {
        Self {
            wait_rule: WaitRule::default(),
            title: "First-come, first-serve".to_string(),
        }
    }

    /// Sets the wait rule.
    pub fn with_wait_rule(mut self, wait_rule: WaitRule) -> Self {
        self.wait_rule = wait_rule;
        self
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The configured wait rule.
    pub fn wait_rule(&self) -> WaitRule {
        self.wait_rule
    }
}

impl Default for Fcfs {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Fcfs {
    fn title(&self) -> &str {
        &self.title
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        validate_processes(processes)?;
        if !is_arrival_ordered(processes) {
            warn!(
                "{}: input is not sorted by arrival, serving in input order",
                self.title
            );
        }

        let mut builder = ScheduleBuilder::new(&self.title, processes.len());
        let mut service_time: i64 = 0;
        let mut wait: i64 = 0;

        for p in processes {
            match self.wait_rule {
                WaitRule::Recomputed => wait = (service_time - p.arrival_time).max(0),
                WaitRule::CarryOver => {
                    if p.arrival_time > 0 {
                        wait = service_time - p.arrival_time;
                    }
                }
            }

            let start = wait + p.arrival_time;
            let turnaround = p.burst_duration + wait;
            let completion = p.burst_duration + p.arrival_time + wait;
            service_time = match self.wait_rule {
                WaitRule::Recomputed => completion,
                WaitRule::CarryOver => service_time + p.burst_duration,
            };

            let row = ScheduleRow {
                id: p.id,
                priority: p.priority,
                burst: p.burst_duration,
                arrival: p.arrival_time,
                wait,
                turnaround,
                completion,
            };
            builder.dispatch(ExecutionInterval::new(p.id, start, service_time), &row)?;
            builder.push_row(row);
        }

        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn spans(schedule: &Schedule) -> Vec<(u64, i64, i64)> {
        schedule
            .trace
            .iter()
            .map(|i| (i.process_id, i.start, i.stop))
            .collect()
    }

    #[test]
    fn test_single_process_throughput() {
        let s = Fcfs::new().schedule(&[Process::new(1, 0, 5)]).unwrap();
        let m = s.metrics.as_ref().unwrap();
        assert!((m.throughput - 0.2).abs() < 1e-10);
        assert!((m.average_wait - 0.0).abs() < 1e-10);
        assert_eq!(spans(&s), vec![(1, 0, 5)]);
    }

    #[test]
    fn test_average_wait_simultaneous_arrivals() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        let s = Fcfs::new().schedule(&processes).unwrap();

        assert_eq!(spans(&s), vec![(1, 0, 5), (2, 5, 8)]);
        let m = s.metrics.as_ref().unwrap();
        assert!((m.average_wait - 2.5).abs() < 1e-10);
        assert!((m.average_turnaround - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let processes = vec![
            Process::new(1, 0, 4).with_priority(3),
            Process::new(2, 1, 2).with_priority(1),
            Process::new(3, 2, 1),
        ];
        let s = Fcfs::new().schedule(&processes).unwrap();

        let ids: Vec<u64> = s.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(s.rows[0].priority, 3);
        assert_eq!(s.rows[1].wait, 3);
        assert_eq!(s.rows[2].wait, 4);
        assert_eq!(s.rows[2].completion, 7);
        for r in &s.rows {
            assert_eq!(r.completion, r.arrival + r.wait + r.burst);
        }
    }

    #[test]
    fn test_idle_gap_advances_clock() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 3)];
        let s = Fcfs::new().schedule(&processes).unwrap();

        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 5, 8)]);
        assert_eq!(s.rows[1].wait, 0);
        assert_eq!(s.metrics.unwrap().last_completion, 8);
    }

    #[test]
    fn test_service_time_is_bursts_plus_gaps() {
        let processes = vec![
            Process::new(1, 0, 3),
            Process::new(2, 1, 2),
            Process::new(3, 10, 4),
            Process::new(4, 11, 1),
        ];
        let s = Fcfs::new().schedule(&processes).unwrap();

        let stops: Vec<i64> = s.trace.iter().map(|i| i.stop).collect();
        // 3, 3+2, idle until 10, 10+4, 14+1
        assert_eq!(stops, vec![3, 5, 14, 15]);
        assert!(stops.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_unsorted_input_served_by_index() {
        let processes = vec![Process::new(1, 4, 2), Process::new(2, 0, 3)];
        let s = Fcfs::new().schedule(&processes).unwrap();

        // Process 1 goes first even though process 2 arrived earlier
        assert_eq!(spans(&s), vec![(1, 4, 6), (2, 6, 9)]);
        assert_eq!(s.rows[1].wait, 6);
    }

    #[test]
    fn test_carry_over_reuses_stale_wait() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
        let s = Fcfs::new()
            .with_wait_rule(WaitRule::CarryOver)
            .schedule(&processes)
            .unwrap();

        // Arrival 0 never recomputes, so both waits stay 0
        assert_eq!(s.rows[1].wait, 0);
        assert_eq!(spans(&s), vec![(1, 0, 5), (2, 0, 8)]);
        assert!((s.metrics.unwrap().average_wait - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_carry_over_mixed_arrivals() {
        let processes = vec![
            Process::new(1, 0, 4),
            Process::new(2, 2, 3),
            Process::new(3, 0, 1),
        ];
        let s = Fcfs::new()
            .with_wait_rule(WaitRule::CarryOver)
            .schedule(&processes)
            .unwrap();

        assert_eq!(s.rows[1].wait, 2);
        assert_eq!(s.rows[2].wait, 2); // stale from process 2
        assert_eq!(s.rows[2].completion, 3);
        assert_eq!(spans(&s), vec![(1, 0, 4), (2, 4, 7), (3, 2, 8)]);
    }

    #[test]
    fn test_carry_over_keeps_negative_wait() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 5, 3)];
        let s = Fcfs::new()
            .with_wait_rule(WaitRule::CarryOver)
            .schedule(&processes)
            .unwrap();

        assert_eq!(s.rows[1].wait, -3);
        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 2, 5)]);
    }

    #[test]
    fn test_empty_input() {
        let s = Fcfs::new().schedule(&[]).unwrap();
        assert!(s.is_empty());
        assert!(s.rows.is_empty());
        assert!(s.metrics.is_none());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let err = Fcfs::new().schedule(&[Process::new(1, 0, 0)]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_time_overflow_rejected() {
        for rule in [WaitRule::Recomputed, WaitRule::CarryOver] {
            let err = Fcfs::new()
                .with_wait_rule(rule)
                .schedule(&[Process::new(1, i64::MAX - 1, 5)])
                .unwrap_err();
            match err {
                ScheduleError::InvalidInput(errors) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow)
                }
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_latest_representable_completion() {
        let s = Fcfs::new()
            .schedule(&[Process::new(1, i64::MAX - 5, 5)])
            .unwrap();
        assert_eq!(spans(&s), vec![(1, i64::MAX - 5, i64::MAX)]);
        assert_eq!(s.rows[0].completion, i64::MAX);
    }

    #[test]
    fn test_title() {
        assert_eq!(Fcfs::new().title(), "First-come, first-serve");
        assert_eq!(Fcfs::new().with_title("FCFS").title(), "FCFS");
        assert_eq!(Fcfs::default().wait_rule(), WaitRule::Recomputed);
    }
}
