//! Storage slot implementations.

pub mod file_slot;
pub mod memory_slot;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;
