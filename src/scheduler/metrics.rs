//! Aggregate metric evaluation.
//!
//! Computes plan-level averages from per-process timing rows.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//!
//! Both averages divide by the number of real processes, never by the
//! interval count — idle gaps carry no metrics.

use crate::models::{AggregateMetrics, ProcessMetrics};

impl AggregateMetrics {
    /// Computes averages over a set of per-process metrics.
    ///
    /// Returns zero averages for an empty slice; the scheduler never
    /// produces one, but the type stays total.
    pub fn calculate(metrics: &[ProcessMetrics]) -> Self {
        if metrics.is_empty() {
            return Self {
                avg_waiting: 0.0,
                avg_turnaround: 0.0,
            };
        }

        let count = metrics.len() as f64;
        let total_waiting: u64 = metrics.iter().map(|m| m.waiting).sum();
        let total_turnaround: u64 = metrics.iter().map(|m| m.turnaround).sum();

        Self {
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, completion: u64, turnaround: u64, waiting: u64) -> ProcessMetrics {
        ProcessMetrics {
            process_id: id.into(),
            completion,
            turnaround,
            waiting,
        }
    }

    #[test]
    fn test_aggregate_reference_scenario() {
        // P1(0,5) P2(1,3) P3(2,8) under FCFS
        let rows = vec![row("P1", 5, 5, 0), row("P2", 8, 7, 4), row("P3", 16, 14, 6)];

        let agg = AggregateMetrics::calculate(&rows);
        assert!((agg.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((agg.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_aggregate_cross_check() {
        let rows = vec![row("A", 4, 4, 1), row("B", 9, 7, 2), row("C", 12, 10, 5)];

        let agg = AggregateMetrics::calculate(&rows);
        let sum_w: u64 = rows.iter().map(|m| m.waiting).sum();
        let sum_t: u64 = rows.iter().map(|m| m.turnaround).sum();
        assert!((agg.avg_waiting - sum_w as f64 / 3.0).abs() < 1e-10);
        assert!((agg.avg_turnaround - sum_t as f64 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_aggregate_single_process() {
        let agg = AggregateMetrics::calculate(&[row("P1", 5, 2, 0)]);
        assert!((agg.avg_waiting - 0.0).abs() < 1e-10);
        assert!((agg.avg_turnaround - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_aggregate_empty() {
        let agg = AggregateMetrics::calculate(&[]);
        assert!((agg.avg_waiting - 0.0).abs() < 1e-10);
        assert!((agg.avg_turnaround - 0.0).abs() < 1e-10);
    }
}
