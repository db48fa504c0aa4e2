//! The replay engine.
//!
//! # Stages
//!
//! For each interval, in plan order:
//!
//! 1. `BlockAppeared` — the block enters the timeline at zero extent.
//! 2. reveal delay (default 100 ms).
//! 3. `BlockExpanded` — the block grows to its full extent.
//! 4. `TimeMarker(start)` — deduplicated per run.
//! 5. dwell delay (default 500 ms).
//!
//! One trailing `TimeMarker(end_time)` closes the run.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::clock::DelayProvider;
use super::event::{ReplayEvent, ReplaySink};
use crate::models::{ExecutionPlan, Ticks};

/// Default delay between a block appearing and expanding.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Default dwell after a block expands, before the next interval.
pub const DEFAULT_DWELL_DELAY: Duration = Duration::from_millis(500);

/// How a replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// Every interval was revealed and the trailing marker emitted.
    Completed,
    /// The cancellation token fired; emission stopped, no error.
    Cancelled,
}

/// Drives the paced, in-order reveal of an execution plan.
///
/// Holds only pacing configuration; all run state (plan, sink, token) is
/// passed explicitly per replay, so one sequencer can serve many runs.
#[derive(Debug, Clone, Copy)]
pub struct Sequencer {
    reveal_delay: Duration,
    dwell_delay: Duration,
}

impl Sequencer {
    /// Creates a sequencer with the default pacing.
    pub fn new() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            dwell_delay: DEFAULT_DWELL_DELAY,
        }
    }

    /// Sets the reveal delay (stage 1 → 2).
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Sets the dwell delay (stage 4 → next interval).
    pub fn with_dwell_delay(mut self, delay: Duration) -> Self {
        self.dwell_delay = delay;
        self
    }

    /// Replays a plan into `sink`, pacing through `clock`.
    ///
    /// Events are emitted strictly in plan order; there is never concurrent
    /// emission for two intervals. Cancelling `cancel` stops the replay at
    /// the next suspension point and returns [`ReplayOutcome::Cancelled`]
    /// without emitting anything further.
    ///
    /// Marker dedup applies to the trailing `TimeMarker` too: for
    /// scheduler-produced plans the end time is always a fresh tick, but a
    /// hand-built plan that repeats a start (or ends on one) gets each tick
    /// marked once, so the `[Appeared, Expanded, Marker]* + Marker` shape
    /// only holds for contiguous plans.
    pub async fn replay<S, D>(
        &self,
        plan: &ExecutionPlan,
        sink: &mut S,
        clock: &D,
        cancel: &CancellationToken,
    ) -> ReplayOutcome
    where
        S: ReplaySink,
        D: DelayProvider,
    {
        let mut marked: HashSet<Ticks> = HashSet::new();
        debug!(intervals = plan.interval_count(), "starting replay");

        for interval in &plan.intervals {
            if cancel.is_cancelled() {
                debug!("replay cancelled");
                return ReplayOutcome::Cancelled;
            }

            sink.deliver(ReplayEvent::BlockAppeared(interval.clone()));

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("replay cancelled during reveal delay");
                    return ReplayOutcome::Cancelled;
                }
                _ = clock.delay(self.reveal_delay) => {}
            }

            sink.deliver(ReplayEvent::BlockExpanded(interval.clone()));
            if marked.insert(interval.start) {
                sink.deliver(ReplayEvent::TimeMarker(interval.start));
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("replay cancelled during dwell delay");
                    return ReplayOutcome::Cancelled;
                }
                _ = clock.delay(self.dwell_delay) => {}
            }
        }

        if cancel.is_cancelled() {
            return ReplayOutcome::Cancelled;
        }

        let end = plan.end_time();
        if marked.insert(end) {
            sink.deliver(ReplayEvent::TimeMarker(end));
        }
        debug!(end_time = end, "replay completed");
        ReplayOutcome::Completed
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
