//! Infrastructure layer: concrete storage, latency and desktop integrations.
//!
//! - [`persistence`] - [`persistence::FileSlot`] and [`persistence::MemorySlot`]
//! - [`latency`] - [`latency::SimulatedLatency`] and [`latency::NoLatency`]
//! - [`desktop`] - Clipboard and browser actions

pub mod desktop;
pub mod latency;
pub mod persistence;
