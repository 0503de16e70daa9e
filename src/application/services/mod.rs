//! Business logic services for the application layer.

pub mod history_service;
pub mod link_service;

pub use history_service::HistoryService;
pub use link_service::LinkService;
