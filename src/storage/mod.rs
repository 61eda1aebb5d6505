//! Key-value store implementations for different backends

pub mod in_memory;
#[cfg(feature = "lmdb")]
pub mod lmdb;

pub use in_memory::InMemoryKeyValueStore;
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbKeyValueStore;
