//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide the API the CLI drives.
//!
//! # Available Services
//!
//! - [`services::history_service::HistoryService`] - Ordered, persisted history of shortened URLs
//! - [`services::link_service::LinkService`] - Validation, duplicate check and short URL creation
//!
//! # Data Flow
//!
//! 1. Input reaches [`services::LinkService::submit`]
//! 2. The URL is validated and checked against the history
//! 3. The simulated latency is awaited
//! 4. A short URL is generated and the record is prepended to the history
//! 5. [`services::HistoryService`] mirrors the full history to its storage slot

pub mod services;
