//! Pluggable pacing for replays.
//!
//! The sequencer never calls `tokio::time::sleep` directly; it suspends
//! through a [`DelayProvider`]. Production replays use [`TokioDelay`],
//! tests use [`NoDelay`] and finish instantly with identical event order.

use std::time::Duration;

use async_trait::async_trait;

/// Source of paced suspension between replay stages.
#[async_trait]
pub trait DelayProvider: Send + Sync {
    /// Suspends the current task for roughly `duration`.
    async fn delay(&self, duration: Duration);
}

/// Wall-clock pacing via the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl DelayProvider for TokioDelay {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Zero-delay pacing: resolves immediately.
///
/// Keeps replays deterministic and instant in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl DelayProvider for NoDelay {
    async fn delay(&self, _duration: Duration) {}
}
