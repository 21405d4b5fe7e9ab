//! Runs several policies over the same batch.

use std::sync::Arc;

use crate::error::ScheduleError;
use crate::models::{Process, Schedule};
use crate::scheduler::{Fcfs, RoundRobin, SchedulingPolicy, ShortestJobFirst};

/// A batch of processes and the policies to run over it.
///
/// # Example
///
/// ```
/// use u_procsim::models::Process;
/// use u_procsim::simulation::Simulation;
///
/// let sim = Simulation::standard(vec![Process::new(1, 0, 5), Process::new(2, 0, 3)]);
/// let schedules = sim.run().unwrap();
///
/// let titles: Vec<&str> = schedules.iter().map(|s| s.title.as_str()).collect();
/// assert_eq!(
///     titles,
///     vec!["First-come, first-serve", "Shortest-job-first", "Priority", "Round-robin"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    processes: Vec<Process>,
    policies: Vec<Arc<dyn SchedulingPolicy>>,
}

impl Simulation {
    /// Creates a simulation with no policies.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            policies: Vec::new(),
        }
    }

    /// Creates a simulation with FCFS, SJF, SJF-priority and round-robin,
    /// in that order.
    pub fn standard(processes: Vec<Process>) -> Self {
        Self::new(processes)
            .with_policy(Fcfs::new())
            .with_policy(ShortestJobFirst::shortest_burst())
            .with_policy(ShortestJobFirst::inverse_burst())
            .with_policy(RoundRobin::new())
    }

    /// Appends a policy.
    pub fn with_policy<P: SchedulingPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Arc::new(policy));
        self
    }

    /// The batch.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of configured policies.
    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    /// Runs every policy over the batch, in the order they were added.
    ///
    /// Each policy sees the same, unmodified batch.
    pub fn run(&self) -> Result<Vec<Schedule>, ScheduleError> {
        self.policies
            .iter()
            .map(|policy| policy.schedule(&self.processes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{RowMode, WaitRule};

    #[test]
    fn test_standard_runs_four_policies() {
        let sim = Simulation::standard(vec![Process::new(1, 0, 2), Process::new(2, 1, 1)]);
        assert_eq!(sim.policy_count(), 4);

        let schedules = sim.run().unwrap();
        assert_eq!(schedules.len(), 4);
        assert_eq!(schedules[3].title, "Round-robin");
    }

    #[test]
    fn test_policies_see_same_batch() {
        let processes = vec![
            Process::new(1, 0, 3),
            Process::new(2, 1, 2),
            Process::new(3, 1, 1),
        ];
        let sim = Simulation::new(processes.clone())
            .with_policy(RoundRobin::new())
            .with_policy(Fcfs::new());
        let schedules = sim.run().unwrap();

        let alone = Fcfs::new().schedule(&processes).unwrap();
        assert_eq!(schedules[1], alone);
        assert_eq!(sim.processes(), processes.as_slice());
    }

    #[test]
    fn test_custom_configuration() {
        let sim = Simulation::new(vec![Process::new(1, 0, 2)])
            .with_policy(Fcfs::new().with_wait_rule(WaitRule::CarryOver))
            .with_policy(RoundRobin::new().with_row_mode(RowMode::PerDispatch));
        let schedules = sim.run().unwrap();
        assert_eq!(schedules[1].rows.len(), 2);
    }

    #[test]
    fn test_invalid_batch_fails() {
        let sim = Simulation::standard(vec![Process::new(1, 0, 0)]);
        assert!(matches!(sim.run(), Err(ScheduleError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_batch_has_no_metrics() {
        let schedules = Simulation::standard(Vec::new()).run().unwrap();
        assert_eq!(schedules.len(), 4);
        assert!(schedules.iter().all(|s| s.metrics.is_none()));
    }
}
