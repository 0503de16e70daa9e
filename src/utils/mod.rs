//! Pure helper functions used across the application.
//!
//! - [`url_validator`] - Accepts absolute http/https URLs
//! - [`code_generator`] - Random short URL generation
//! - [`display`] - Relative time and truncation for rendering history
//! - [`extract_domain`] - Hostname extraction from URLs

pub mod code_generator;
pub mod display;
pub mod extract_domain;
pub mod url_validator;
