//! Destination for validated payloads
//!
//! The sink is the seam where a real backend would plug in. The controller only
//! knows the [`SubmissionSink`] trait; the site ships with [`StubSink`], which
//! accepts everything after a fixed delay.

use super::payload::{Payload, Receipt};
use crate::error::SinkError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Default delay of the stub sink
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Trait for submission destinations, enabling mocking in tests
///
/// A call is a single attempt: implementations do not retry. A retry is a new
/// submit initiated by the guest.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one payload, resolving once the destination has answered
    async fn send(&self, payload: Payload) -> Result<Receipt, SinkError>;
}

/// Stand-in backend: waits `latency`, then accepts
#[derive(Debug, Clone)]
pub struct StubSink {
    latency: Duration,
}

impl StubSink {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for StubSink {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl SubmissionSink for StubSink {
    async fn send(&self, payload: Payload) -> Result<Receipt, SinkError> {
        let kind = payload.kind();
        debug!(%kind, latency_ms = self.latency.as_millis() as u64, "stub sink received payload");
        tokio::time::sleep(self.latency).await;
        Ok(Receipt::new(kind))
    }
}
