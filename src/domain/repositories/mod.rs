//! Storage trait definitions for the domain layer.
//!
//! The history is persisted through [`StorageSlot`], implemented in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod storage_slot;

pub use storage_slot::StorageSlot;

#[cfg(test)]
pub use storage_slot::MockStorageSlot;
