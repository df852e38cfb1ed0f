//! Client storage adapters.

mod file_storage;
mod memory_storage;

pub use file_storage::FileClientStorage;
pub use memory_storage::MemoryClientStorage;
