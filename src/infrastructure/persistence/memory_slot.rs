//! In-process slot for ephemeral sessions and tests.

use std::sync::Mutex;

use tracing::debug;

use crate::domain::repositories::StorageSlot;
use crate::error::AppError;

/// A slot that keeps its contents in memory.
///
/// Used when no durable history is wanted. Contents are lost when the slot
/// is dropped.
#[derive(Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        debug!("Using MemorySlot (history is not persisted)");
        Self::default()
    }

    /// Creates a slot pre-filled with `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, AppError> {
        let guard = self
            .contents
            .lock()
            .map_err(|_| AppError::storage("memory slot lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> Result<(), AppError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| AppError::storage("memory slot lock poisoned"))?;
        *guard = Some(contents.to_string());
        Ok(())
    }
}
