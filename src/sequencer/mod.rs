//! Paced replay of execution plans.
//!
//! The sequencer turns a static [`ExecutionPlan`](crate::models::ExecutionPlan)
//! into a time-paced stream of render events: each interval appears, then
//! expands after a short delay, then the replay dwells before moving on.
//! Consumers (a terminal view, a DOM, a log) only implement [`ReplaySink`];
//! nothing flows back into the core.
//!
//! # Determinism
//!
//! Event order is fixed by the plan: `[Appeared, Expanded, Marker]` per
//! interval, then one trailing `Marker` at the plan end time. Pacing is
//! pluggable through [`DelayProvider`], so tests replay instantly while
//! real consumers get wall-clock pacing.
//!
//! # Cancellation
//!
//! A replay carries a `CancellationToken`. Cancelling it (a reset, or a new
//! run superseding this one) stops emission at the next suspension point;
//! no event for a superseded plan is ever delivered afterwards.

mod clock;
mod event;
mod replay;

pub use clock::{DelayProvider, NoDelay, TokioDelay};
pub use event::{ReplayEvent, ReplaySink};
pub use replay::{ReplayOutcome, Sequencer, DEFAULT_DWELL_DELAY, DEFAULT_REVEAL_DELAY};
