//! Latency sources for the shortening workflow.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::latency::Latency;

/// Default simulated round-trip of the shortening call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Sleeps for a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    duration: Duration,
}

impl SimulatedLatency {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}
