//! Domain layer: the history record and the seams the workflow depends on.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::ShortenedUrl`] record
//! - [`repositories`] - The durable [`repositories::StorageSlot`]
//! - [`latency`] - The injectable [`latency::Latency`] suspension point
//!
//! The domain layer has no dependencies on infrastructure. Concrete slots and
//! latency sources live in [`crate::infrastructure`] and are injected into
//! the services in [`crate::application::services`].

pub mod entities;
pub mod latency;
pub mod repositories;
