//! Simulated network latency of the shortening workflow.

use async_trait::async_trait;

/// Suspension point standing in for a remote call.
///
/// The workflow awaits [`Latency::wait`] exactly once per accepted URL, after
/// validation and the duplicate check and before the code is generated.
///
/// # Implementations
///
/// - [`crate::infrastructure::latency::SimulatedLatency`] - fixed tokio timer
/// - [`crate::infrastructure::latency::NoLatency`] - returns immediately
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Latency: Send + Sync {
    async fn wait(&self);
}
