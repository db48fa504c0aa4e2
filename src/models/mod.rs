//! Simulation domain models.
//!
//! Core data types for describing a scheduling workload and the plan the
//! scheduler produces from it. The scheduler consumes a read-only snapshot
//! of [`ProcessDescriptor`]s and returns a fresh [`ExecutionPlan`] per run;
//! none of these types hold hidden state across runs.
//!
//! # Time Representation
//!
//! All times are integer [`Ticks`] relative to a simulation epoch (t=0).
//! The consumer defines what one tick means; the sequencer's pacing delays
//! are wall-clock and independent of tick magnitude.

mod plan;
mod process;

pub use plan::{AggregateMetrics, ExecutionInterval, ExecutionPlan, ProcessMetrics, Subject};
pub use process::ProcessDescriptor;

/// Simulation time unit.
pub type Ticks = u64;
