//! Execution plan (solution) model.
//!
//! An execution plan is the complete output of one scheduling run: an
//! ordered, gapless sequence of execution intervals plus per-process and
//! aggregate timing metrics.
//!
//! # Invariants
//!
//! - Intervals are contiguous and non-overlapping:
//!   `interval[i].end() == interval[i + 1].start`.
//! - The first interval starts at t=0 (an idle interval fills the gap when
//!   the earliest arrival is later).
//! - Every interval has a positive duration.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// What an execution interval is occupied by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    /// A real process, by descriptor id.
    Process(String),
    /// No process was ready to run.
    Idle,
}

impl Subject {
    /// Display label: the process id, or `"Idle"`.
    pub fn label(&self) -> &str {
        match self {
            Subject::Process(id) => id,
            Subject::Idle => "Idle",
        }
    }
}

/// A contiguous slice of simulated CPU time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Occupant of this interval.
    pub subject: Subject,
    /// Start time (ticks).
    pub start: Ticks,
    /// Duration (ticks, > 0).
    pub duration: Ticks,
}

impl ExecutionInterval {
    /// Creates an interval occupied by a process.
    pub fn process(id: impl Into<String>, start: Ticks, duration: Ticks) -> Self {
        Self {
            subject: Subject::Process(id.into()),
            start,
            duration,
        }
    }

    /// Creates an idle interval.
    pub fn idle(start: Ticks, duration: Ticks) -> Self {
        Self {
            subject: Subject::Idle,
            start,
            duration,
        }
    }

    /// End time (start + duration).
    #[inline]
    pub fn end(&self) -> Ticks {
        self.start + self.duration
    }

    /// Whether this interval is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.subject == Subject::Idle
    }
}

/// Per-process timing metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Descriptor id this row belongs to.
    pub process_id: String,
    /// Time the process finished executing.
    pub completion: Ticks,
    /// `completion - arrival`.
    pub turnaround: Ticks,
    /// `turnaround - burst`. Never negative under FCFS.
    pub waiting: Ticks,
}

/// Averages over the real (non-idle) processes of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
}

/// A complete scheduling run result.
///
/// Produced by [`FcfsScheduler::compute_plan`](crate::scheduler::FcfsScheduler::compute_plan);
/// never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    /// Ordered execution intervals, including idle gaps.
    pub intervals: Vec<ExecutionInterval>,
    /// Per-process metrics, in scheduled order.
    pub metrics: Vec<ProcessMetrics>,
    /// Pre-computed averages over real processes.
    pub aggregate: AggregateMetrics,
}

impl ExecutionPlan {
    /// End time of the plan: the last interval's end.
    pub fn end_time(&self) -> Ticks {
        self.intervals.last().map(ExecutionInterval::end).unwrap_or(0)
    }

    /// Metrics row for a given process id.
    pub fn metrics_for(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.process_id == process_id)
    }

    /// Number of real (non-idle) processes in the plan.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }

    /// Number of intervals, idle gaps included.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the interval sequence is gapless and non-overlapping.
    pub fn is_contiguous(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|w| w[0].end() == w[1].start)
    }
}
