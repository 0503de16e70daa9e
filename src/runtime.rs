//! Service wiring and lifecycle.
//!
//! Builds the default [`LinkService`] from [`Config`]: file-backed history,
//! tokio-timer latency and an OS-seeded random source.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::application::services::{HistoryService, LinkService};
use crate::config::Config;
use crate::domain::latency::Latency;
use crate::domain::repositories::StorageSlot;
use crate::error::AppError;
use crate::infrastructure::latency::SimulatedLatency;
use crate::infrastructure::persistence::FileSlot;

/// The service used by the CLI.
pub type DefaultLinkService = LinkService<FileSlot, SimulatedLatency, StdRng>;

/// Opens the history described by `config` and builds the service around it.
///
/// A missing or unreadable history starts empty; see [`HistoryService::load`].
pub fn open_service(config: &Config) -> DefaultLinkService {
    let slot = FileSlot::new(&config.data_dir, &config.storage_key);
    tracing::info!(path = %slot.path().display(), "Opening URL history");

    let history = HistoryService::open(Arc::new(slot));
    let latency = Arc::new(SimulatedLatency::new(config.latency()));

    LinkService::new(history, latency, StdRng::from_os_rng())
}

/// Performs the final persist of the history.
///
/// # Errors
///
/// Returns [`AppError::Storage`] if the history cannot be written.
pub fn shutdown<S, L, R>(service: LinkService<S, L, R>) -> Result<(), AppError>
where
    S: StorageSlot,
    L: Latency,
    R: rand::Rng,
{
    service.into_history().close()?;
    tracing::debug!("URL history closed");
    Ok(())
}
