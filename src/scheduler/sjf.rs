//! Non-preemptive shortest-job scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort a view of the batch by arrival time.
//! 2. Admit every process that has arrived by the service clock into the
//!    ready heap, keyed by the configured [`ReadyKey`].
//! 3. If nothing is ready, jump the clock to the next arrival.
//! 4. Otherwise pop the smallest key and run it to completion.
//!
//! With [`ShortestBurst`] this is classic SJF. With [`InverseBurst`] it is
//! the "Priority" policy, whose key is the integer inverse of the burst.
//!
//! # Complexity
//! O(n log n).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::warn;

use super::{ScheduleBuilder, SchedulingPolicy};
use crate::dispatching::rules::{InverseBurst, ShortestBurst};
use crate::dispatching::{ReadyHeap, ReadyKey};
use crate::error::ScheduleError;
use crate::models::{ExecutionInterval, Process, Schedule, ScheduleRow};
use crate::validation::validate_processes;

/// Non-preemptive ready-heap policy parameterised by its key.
///
/// # Example
/// ```
/// use u_procsim::models::Process;
/// use u_procsim::scheduler::{SchedulingPolicy, ShortestJobFirst};
///
/// let processes = vec![
///     Process::new(1, 0, 6),
///     Process::new(2, 0, 2),
///     Process::new(3, 0, 4),
/// ];
/// let schedule = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();
/// let order: Vec<u64> = schedule.trace.iter().map(|i| i.process_id).collect();
/// assert_eq!(order, vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestJobFirst<K> {
    key: K,
    title: String,
}

impl<K: ReadyKey> ShortestJobFirst<K> {
    /// Creates the policy with the given key, titled by its description.
    pub fn new(key: K) -> Self {
        let title = key.description().to_string();
        Self { key, title }
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The ready-order key.
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl ShortestJobFirst<ShortestBurst> {
    /// Classic shortest-job-first.
    pub fn shortest_burst() -> Self {
        Self::new(ShortestBurst).with_title("Shortest-job-first")
    }
}

impl ShortestJobFirst<InverseBurst> {
    /// Priority scheduling keyed by `1 / burst`.
    pub fn inverse_burst() -> Self {
        Self::new(InverseBurst).with_title("Priority")
    }
}

impl<K: ReadyKey> SchedulingPolicy for ShortestJobFirst<K> {
    fn title(&self) -> &str {
        &self.title
    }

    fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        validate_processes(processes)?;

        let mut arrivals: Vec<&Process> = processes.iter().collect();
        arrivals.sort_by_key(|p| p.arrival_time);

        let mut builder = ScheduleBuilder::new(&self.title, processes.len());
        let mut ready: ReadyHeap<&Process> = ReadyHeap::with_capacity(arrivals.len());
        let mut admitted = 0;
        let mut service_time: i64 = 0;

        while admitted < arrivals.len() || !ready.is_empty() {
            while let Some(&p) = arrivals.get(admitted) {
                if p.arrival_time > service_time {
                    break;
                }
                ready.push(p, self.key.key(p)?);
                admitted += 1;
            }

            if ready.is_empty() {
                let Some(next) = arrivals.get(admitted) else {
                    break;
                };
                warn!(
                    "{}: processor idle from {} to {}",
                    self.title, service_time, next.arrival_time
                );
                service_time = next.arrival_time;
                continue;
            }

            let (p, _) = ready.pop()?;
            let wait = service_time - p.arrival_time;
            let start = wait + p.arrival_time;
            let turnaround = p.burst_duration + wait;
            let completion = p.burst_duration + p.arrival_time + wait;
            service_time += p.burst_duration;

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
    fn test_sjf_simultaneous_arrivals() {
        let processes = vec![
            Process::new(1, 0, 6),
            Process::new(2, 0, 2),
            Process::new(3, 0, 4),
        ];
        let s = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();

        assert_eq!(spans(&s), vec![(2, 0, 2), (3, 2, 6), (1, 6, 12)]);
        let ids: Vec<u64> = s.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        // waits 0 + 2 + 6
        assert!((s.metrics.unwrap().average_wait - 8.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_staggered_arrivals() {
        let processes = vec![
            Process::new(1, 0, 7),
            Process::new(2, 2, 4),
            Process::new(3, 4, 1),
            Process::new(4, 5, 4),
        ];
        let s = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();

        // Only 1 is ready at t=0; at t=7 the rest compete, 2 beats 4 on the tie
        assert_eq!(
            spans(&s),
            vec![(1, 0, 7), (3, 7, 8), (2, 8, 12), (4, 12, 16)]
        );
        let m = s.metrics.unwrap();
        assert!((m.average_wait - 4.0).abs() < 1e-10);
        assert_eq!(m.last_completion, 16);
    }

    #[test]
    fn test_sjf_equal_bursts_keep_arrival_order() {
        let processes = vec![
            Process::new(1, 0, 3),
            Process::new(2, 0, 3),
            Process::new(3, 0, 3),
        ];
        let s = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();
        let order: Vec<u64> = s.trace.iter().map(|i| i.process_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_sjf_sorts_by_arrival() {
        let processes = vec![Process::new(1, 5, 1), Process::new(2, 0, 3)];
        let s = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();
        assert_eq!(spans(&s), vec![(2, 0, 3), (1, 5, 6)]);
    }

    #[test]
    fn test_sjf_idle_gap_advances_clock() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 6, 3)];
        let s = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();

        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 6, 9)]);
        assert_eq!(s.rows[1].wait, 0);
    }

    #[test]
    fn test_sjf_late_first_arrival() {
        let s = ShortestJobFirst::shortest_burst()
            .schedule(&[Process::new(1, 3, 2)])
            .unwrap();
        assert_eq!(spans(&s), vec![(1, 3, 5)]);
        assert!((s.metrics.unwrap().throughput - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_every_process_dispatched_once() {
        let processes = vec![
            Process::new(1, 0, 2),
            Process::new(2, 0, 9),
            Process::new(3, 0, 1),
            Process::new(4, 0, 5),
        ];
        let s = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();
        assert_eq!(s.dispatch_count(), 4);
        for p in &processes {
            assert_eq!(s.intervals_for(p.id).len(), 1);
        }
    }

    #[test]
    fn test_priority_burst_one_runs_last_among_ready() {
        let processes = vec![
            Process::new(1, 0, 1),
            Process::new(2, 0, 3),
            Process::new(3, 0, 2),
        ];
        let s = ShortestJobFirst::inverse_burst().schedule(&processes).unwrap();

        // keys: 1, 0, 0 -> the key-0 pair first in arrival order, then burst 1
        assert_eq!(spans(&s), vec![(2, 0, 3), (3, 3, 5), (1, 5, 6)]);

        let sjf = ShortestJobFirst::shortest_burst().schedule(&processes).unwrap();
        assert_eq!(spans(&sjf), vec![(1, 0, 1), (3, 1, 3), (2, 3, 6)]);
    }

    #[test]
    fn test_priority_ignores_burst_magnitude() {
        let processes = vec![Process::new(1, 0, 10), Process::new(2, 0, 2)];
        let s = ShortestJobFirst::inverse_burst().schedule(&processes).unwrap();
        // Both keys are 0: arrival order wins, not the shorter burst
        assert_eq!(spans(&s), vec![(1, 0, 10), (2, 10, 12)]);
    }

    #[test]
    fn test_priority_lone_burst_one_is_dispatched() {
        let processes = vec![Process::new(1, 0, 1), Process::new(2, 1, 5)];
        let s = ShortestJobFirst::inverse_burst().schedule(&processes).unwrap();
        assert_eq!(spans(&s), vec![(1, 0, 1), (2, 1, 6)]);
    }

    #[test]
    fn test_zero_burst_rejected() {
        let err = ShortestJobFirst::inverse_burst()
            .schedule(&[Process::new(1, 0, 0)])
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
    }

    #[test]
    fn test_time_overflow_rejected() {
        let processes = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];
        for schedule in [
            ShortestJobFirst::shortest_burst().schedule(&processes),
            ShortestJobFirst::inverse_burst().schedule(&processes),
        ] {
            match schedule {
                Err(ScheduleError::InvalidInput(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow)
                }
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let s = ShortestJobFirst::shortest_burst().schedule(&[]).unwrap();
        assert!(s.is_empty());
        assert!(s.metrics.is_none());
    }

    #[test]
    fn test_titles() {
        assert_eq!(ShortestJobFirst::shortest_burst().title(), "Shortest-job-first");
        assert_eq!(ShortestJobFirst::inverse_burst().title(), "Priority");
        assert_eq!(
            ShortestJobFirst::new(ShortestBurst).title(),
            "Shortest Job First"
        );
    }
}
