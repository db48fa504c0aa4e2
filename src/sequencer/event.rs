//! Replay events and the sink they are delivered to.

use serde::{Deserialize, Serialize};

use crate::models::{ExecutionInterval, Ticks};

/// A render event emitted during replay.
///
/// Events reference intervals by value so a sink never needs to hold the
/// plan itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplayEvent {
    /// An interval has entered the timeline with zero visual extent.
    BlockAppeared(ExecutionInterval),
    /// The interval has grown to its full extent.
    BlockExpanded(ExecutionInterval),
    /// A tick value should be marked on the time axis.
    ///
    /// Emitted at most once per tick value per replay.
    TimeMarker(Ticks),
}

/// Consumer of replay events.
///
/// Blanket-implemented for closures, so a test can simply collect into a
/// `Vec`:
///
/// ```
/// use fcfs_sim::sequencer::{ReplayEvent, ReplaySink};
///
/// let mut events = Vec::new();
/// let mut sink = |ev: ReplayEvent| events.push(ev);
/// sink.deliver(ReplayEvent::TimeMarker(0));
/// assert_eq!(events.len(), 1);
/// ```
pub trait ReplaySink {
    /// Delivers one event. Must not block.
    fn deliver(&mut self, event: ReplayEvent);
}

impl<F: FnMut(ReplayEvent)> ReplaySink for F {
    fn deliver(&mut self, event: ReplayEvent) {
        self(event)
    }
}
