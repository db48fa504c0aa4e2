//! FCFS scheduling and metric evaluation.
//!
//! # Algorithm
//!
//! [`FcfsScheduler`] implements First-Come-First-Served: processes run
//! strictly in arrival order, each to completion. It is non-preemptive and
//! optimal for nothing, but it is the canonical introductory discipline and
//! fully deterministic.
//!
//! # Metrics
//!
//! [`AggregateMetrics::calculate`] computes mean waiting and turnaround
//! times over the real (non-idle) processes of a plan.
//!
//! # Reference
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

mod fcfs;
mod metrics;

pub use fcfs::FcfsScheduler;

pub use crate::models::AggregateMetrics;
