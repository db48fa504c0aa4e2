//! FCFS scheduling simulation and timeline replay.
//!
//! Simulates First-Come-First-Served CPU scheduling and replays the
//! resulting timeline as a deterministic, paced stream of render events.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `ExecutionInterval`,
//!   `ExecutionPlan`, `ProcessMetrics`, `AggregateMetrics`
//! - **`scheduler`**: The pure FCFS engine and aggregate metric evaluation
//! - **`sequencer`**: Async replay of a plan with pluggable pacing and
//!   cooperative cancellation
//! - **`session`**: Caller-owned workload and run lifecycle
//! - **`validation`**: Input integrity checks (duplicate IDs, zero bursts)
//! - **`report`**: Two-decimal plain-text rendering of run metrics
//!
//! # Architecture
//!
//! The scheduler is synchronous and side-effect free; the sequencer is the
//! only suspending component. There is one logical thread of control —
//! cooperative suspension happens solely at the sequencer's pacing delays,
//! so no locking is involved anywhere.
//!
//! # Example
//!
//! ```
//! use fcfs_sim::models::ProcessDescriptor;
//! use fcfs_sim::scheduler::FcfsScheduler;
//! use fcfs_sim::report::format_summary;
//!
//! let processes = vec![
//!     ProcessDescriptor::new("P1", 0, 5),
//!     ProcessDescriptor::new("P2", 1, 3),
//!     ProcessDescriptor::new("P3", 2, 8),
//! ];
//!
//! let plan = FcfsScheduler::new().compute_plan(&processes).unwrap();
//! assert_eq!(plan.end_time(), 16);
//! assert!(format_summary(&plan.aggregate).contains("3.33"));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod sequencer;
pub mod session;
pub mod validation;

pub use error::ScheduleError;
pub use models::{ExecutionInterval, ExecutionPlan, ProcessDescriptor, Ticks};
pub use scheduler::FcfsScheduler;
pub use sequencer::{ReplayEvent, ReplayOutcome, Sequencer};
pub use session::{Session, Workload};
