//! Caller-owned run state.
//!
//! The process list and the in-flight replay handle live here, owned
//! explicitly by the caller — the scheduler and sequencer themselves hold
//! no state between runs.
//!
//! # Run discipline
//!
//! One run at a time: [`Session::begin_run`] cancels any replay still in
//! flight before computing a fresh plan, so a superseded replay can never
//! emit another event. [`Session::reset`] does the same and clears the
//! workload.

use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{ExecutionPlan, ProcessDescriptor, Ticks};
use crate::scheduler::FcfsScheduler;
use crate::validation::validate_processes;

/// The accumulating process list.
///
/// Descriptors survive runs and are cleared only by an explicit
/// [`reset`](Workload::reset). Auto-assigned ids restart at `P1` after a
/// reset.
#[derive(Debug, Clone)]
pub struct Workload {
    processes: Vec<ProcessDescriptor>,
    next_id: u32,
}

impl Workload {
    /// Creates an empty workload.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            next_id: 1,
        }
    }

    /// Submits a process with an auto-assigned id (`P1`, `P2`, …) and a
    /// randomly generated color tag.
    ///
    /// Returns the assigned id.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidDescriptor`] when `burst` is zero.
    pub fn submit(&mut self, arrival: Ticks, burst: Ticks) -> Result<String, ScheduleError> {
        let id = format!("P{}", self.next_id);
        let descriptor = ProcessDescriptor::new(&id, arrival, burst).with_tag(random_color());
        self.submit_descriptor(descriptor)?;
        self.next_id += 1;
        Ok(id)
    }

    /// Submits a caller-built descriptor.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidDescriptor`] when the descriptor fails
    /// structural validation against the current list (zero burst,
    /// duplicate id). The list is unchanged on error.
    pub fn submit_descriptor(&mut self, descriptor: ProcessDescriptor) -> Result<(), ScheduleError> {
        self.processes.push(descriptor);
        if let Err(errors) = validate_processes(&self.processes) {
            self.processes.pop();
            return Err(ScheduleError::InvalidDescriptor(errors));
        }
        Ok(())
    }

    /// Read-only snapshot of the submitted processes.
    pub fn processes(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    /// Clears all processes and restarts the id counter.
    pub fn reset(&mut self) {
        self.processes.clear();
        self.next_id = 1;
    }

    /// Number of submitted processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process has been submitted.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl Default for Workload {
    fn default() -> Self {
        Self::new()
    }
}

/// A workload plus the handle to its in-flight replay, if any.
#[derive(Debug, Default)]
pub struct Session {
    workload: Workload,
    active: Option<CancellationToken>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self {
            workload: Workload::new(),
            active: None,
        }
    }

    /// The session's workload.
    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    /// Mutable access to the workload, for submissions.
    pub fn workload_mut(&mut self) -> &mut Workload {
        &mut self.workload
    }

    /// Starts a run: cancels any in-flight replay, computes a fresh plan,
    /// and returns it with the cancellation token the new replay must
    /// carry.
    ///
    /// # Errors
    /// [`ScheduleError::EmptyInput`] when no process has been submitted.
    pub fn begin_run(&mut self) -> Result<(ExecutionPlan, CancellationToken), ScheduleError> {
        if let Some(previous) = self.active.take() {
            debug!("superseding in-flight replay");
            previous.cancel();
        }

        let plan = FcfsScheduler::new().compute_plan(self.workload.processes())?;
        let token = CancellationToken::new();
        self.active = Some(token.clone());
        Ok((plan, token))
    }

    /// Cancels any in-flight replay and clears the workload.
    pub fn reset(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel();
        }
        self.workload.reset();
    }
}

/// Generates a `#RRGGBB` display color.
fn random_color() -> String {
    let mut rng = rand::rng();
    format!("#{:06X}", rng.random_range(0..=0xFF_FFFFu32))
}
