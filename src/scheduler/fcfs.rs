//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort descriptors by ascending arrival time. Ties keep
//!    submission order — they are never broken by id or burst.
//! 2. Walk the sorted sequence with a running clock starting at t=0.
//! 3. When the clock trails the next arrival, emit an idle interval
//!    covering the gap.
//! 4. Emit one execution interval per process and record its completion,
//!    turnaround, and waiting times.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{
    AggregateMetrics, ExecutionInterval, ExecutionPlan, ProcessDescriptor, ProcessMetrics,
};

/// First-Come-First-Served scheduler.
///
/// Pure and stateless: the same input snapshot always yields the same plan,
/// and the input is never mutated.
///
/// # Example
///
/// ```
/// use fcfs_sim::models::ProcessDescriptor;
/// use fcfs_sim::scheduler::FcfsScheduler;
///
/// let processes = vec![
///     ProcessDescriptor::new("P1", 0, 5),
///     ProcessDescriptor::new("P2", 1, 3),
/// ];
///
/// let plan = FcfsScheduler::new().compute_plan(&processes).unwrap();
/// assert_eq!(plan.end_time(), 8);
/// assert_eq!(plan.metrics_for("P2").unwrap().waiting, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Computes an execution plan for the given processes.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::EmptyInput`] when `processes` is empty. No partial
    /// plan is ever produced.
    pub fn compute_plan(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<ExecutionPlan, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }

        let order = self.sort_by_arrival(processes);

        let mut intervals = Vec::with_capacity(processes.len());
        let mut metrics = Vec::with_capacity(processes.len());
        let mut current_time = 0;

        for &idx in &order {
            let process = &processes[idx];

            // No process is ready: insert an idle gap up to the arrival.
            if current_time < process.arrival {
                intervals.push(ExecutionInterval::idle(
                    current_time,
                    process.arrival - current_time,
                ));
                current_time = process.arrival;
            }

            intervals.push(ExecutionInterval::process(
                process.id.clone(),
                current_time,
                process.burst,
            ));
            current_time += process.burst;

            let completion = current_time;
            let turnaround = completion - process.arrival;
            metrics.push(ProcessMetrics {
                process_id: process.id.clone(),
                completion,
                turnaround,
                waiting: turnaround - process.burst,
            });
        }

        let aggregate = AggregateMetrics::calculate(&metrics);
        debug!(
            processes = metrics.len(),
            intervals = intervals.len(),
            end_time = current_time,
            "computed FCFS plan"
        );

        Ok(ExecutionPlan {
            intervals,
            metrics,
            aggregate,
        })
    }

    /// Returns process indices sorted by arrival, preserving submission
    /// order among equal arrivals.
    fn sort_by_arrival(&self, processes: &[ProcessDescriptor]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by_key(|&i| processes[i].arrival);
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;

    fn proc(id: &str, arrival: u64, burst: u64) -> ProcessDescriptor {
        ProcessDescriptor::new(id, arrival, burst)
    }

    #[test]
    fn test_reference_scenario() {
        let processes = vec![proc("P1", 0, 5), proc("P2", 1, 3), proc("P3", 2, 8)];
        let plan = FcfsScheduler::new().compute_plan(&processes).unwrap();

        assert_eq!(
            plan.intervals,
            vec![
                ExecutionInterval::process("P1", 0, 5),
                ExecutionInterval::process("P2", 5, 3),
                ExecutionInterval::process("P3", 8, 8),
            ]
        );

        let completions: Vec<u64> = plan.metrics.iter().map(|m| m.completion).collect();
        let turnarounds: Vec<u64> = plan.metrics.iter().map(|m| m.turnaround).collect();
        let waitings: Vec<u64> = plan.metrics.iter().map(|m| m.waiting).collect();
        assert_eq!(completions, vec![5, 8, 16]);
        assert_eq!(turnarounds, vec![5, 7, 14]);
        assert_eq!(waitings, vec![0, 4, 6]);

        assert!((plan.aggregate.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((plan.aggregate.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_idle_gap_before_first_arrival() {
        let plan = FcfsScheduler::new()
            .compute_plan(&[proc("P1", 3, 2)])
            .unwrap();

        assert_eq!(
            plan.intervals,
            vec![
                ExecutionInterval::idle(0, 3),
                ExecutionInterval::process("P1", 3, 2),
            ]
        );
        assert_eq!(plan.metrics_for("P1").unwrap().waiting, 0);
        assert_eq!(plan.end_time(), 5);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let plan = FcfsScheduler::new()
            .compute_plan(&[proc("P1", 0, 2), proc("P2", 10, 1)])
            .unwrap();

        assert_eq!(plan.intervals[1], ExecutionInterval::idle(2, 8));
        assert_eq!(plan.metrics_for("P2").unwrap().waiting, 0);
        assert!(plan.is_contiguous());
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = FcfsScheduler::new().compute_plan(&[]).unwrap_err();
        assert_eq!(err, ScheduleError::EmptyInput);
    }

    #[test]
    fn test_arrival_ties_keep_submission_order() {
        // Equal arrivals; burst and id would both reorder if (wrongly) used
        // as tie-breakers.
        let processes = vec![proc("Z", 5, 9), proc("A", 5, 1)];
        let plan = FcfsScheduler::new().compute_plan(&processes).unwrap();

        assert_eq!(plan.intervals[1].subject, Subject::Process("Z".into()));
        assert_eq!(plan.intervals[2].subject, Subject::Process("A".into()));
    }

    #[test]
    fn test_unsorted_input() {
        let processes = vec![proc("P3", 2, 8), proc("P1", 0, 5), proc("P2", 1, 3)];
        let plan = FcfsScheduler::new().compute_plan(&processes).unwrap();

        let order: Vec<&str> = plan
            .metrics
            .iter()
            .map(|m| m.process_id.as_str())
            .collect();
        assert_eq!(order, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_contiguity_and_nonnegative_waiting() {
        let processes = vec![
            proc("A", 7, 2),
            proc("B", 0, 4),
            proc("C", 3, 1),
            proc("D", 20, 6),
            proc("E", 3, 5),
        ];
        let plan = FcfsScheduler::new().compute_plan(&processes).unwrap();

        assert!(plan.is_contiguous());
        assert_eq!(plan.intervals[0].start, 0);
        for interval in &plan.intervals {
            assert!(interval.duration > 0);
        }
        // waiting is u64, so >= 0 holds by type; check the arithmetic agrees
        for m in &plan.metrics {
            assert_eq!(m.waiting, m.turnaround - burst_of(&processes, &m.process_id));
        }
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let processes = vec![proc("P2", 4, 2), proc("P1", 1, 3)];
        let snapshot = processes.clone();
        let scheduler = FcfsScheduler::new();

        let first = scheduler.compute_plan(&processes).unwrap();
        let second = scheduler.compute_plan(&processes).unwrap();
        assert_eq!(first, second);
        assert_eq!(processes, snapshot);
    }

    fn burst_of(processes: &[ProcessDescriptor], id: &str) -> u64 {
        processes.iter().find(|p| p.id == id).unwrap().burst
    }
}
