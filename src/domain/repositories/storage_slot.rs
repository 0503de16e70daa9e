//! Durable key-value slot holding the serialized history.

use crate::error::AppError;

/// A single named entry in durable storage.
///
/// The history store owns the records; the slot only mirrors them. Every
/// write replaces the previous contents entirely.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileSlot`] - one JSON file per key
/// - [`crate::infrastructure::persistence::MemorySlot`] - in-process, not durable
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait StorageSlot: Send + Sync {
    /// Reads the slot contents.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(contents))` if the slot has been written before
    /// - `Ok(None)` if the slot does not exist yet
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, AppError>;

    /// Overwrites the slot contents.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the contents cannot be written.
    fn write(&self, contents: &str) -> Result<(), AppError>;
}
