//! # Shortly
//!
//! A local URL shortener: turns long URLs into `https://short.ly/XXXXXXX`
//! links and keeps a persisted, searchable history of everything shortened.
//! Short links are for display only; nothing resolves them.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The history record and the storage/latency traits
//! - **Application Layer** ([`application`]) - History store and shortening workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - File storage, timers, clipboard and browser
//! - **Utilities** ([`utils`]) - URL validation, code generation, display formatting
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- shorten https://example.com/a/b
//! cargo run -- list
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;
pub mod runtime;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{HistoryService, LinkService};
    pub use crate::domain::entities::ShortenedUrl;
    pub use crate::domain::latency::Latency;
    pub use crate::domain::repositories::StorageSlot;
    pub use crate::error::AppError;
    pub use crate::infrastructure::latency::{NoLatency, SimulatedLatency};
    pub use crate::infrastructure::persistence::{FileSlot, MemorySlot};
}
