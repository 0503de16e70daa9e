//! Core domain entities.
//!
//! The history holds a single entity type, [`ShortenedUrl`]. It is plain data:
//! creation, ordering and persistence are handled by the application layer.

pub mod shortened_url;

pub use shortened_url::ShortenedUrl;
