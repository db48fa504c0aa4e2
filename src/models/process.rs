//! Process descriptor model.
//!
//! A process descriptor is the unit of input to the scheduler: an
//! identifier, an arrival time, and a CPU burst duration. Descriptors are
//! immutable once submitted to a run.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// A process to be scheduled.
///
/// # Invariants
///
/// `burst` must be positive. The input boundary
/// ([`validate_processes`](crate::validation::validate_processes)) enforces
/// this before a descriptor reaches the scheduler; the scheduler itself does
/// not re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier (e.g. `"P1"`).
    pub id: String,
    /// Arrival time (ticks from the simulation epoch).
    pub arrival: Ticks,
    /// CPU burst duration (ticks, > 0).
    pub burst: Ticks,
    /// Opaque display attribute (e.g. a color). Ignored by the scheduler.
    pub tag: Option<String>,
}

impl ProcessDescriptor {
    /// Creates a descriptor with the given id, arrival, and burst.
    pub fn new(id: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            tag: None,
        }
    }

    /// Sets the display tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
