//! Durable key-value storage adapters.

mod file_kv_store;
mod memory_kv_store;

pub use file_kv_store::{FileKeyValueStore, SLOT_EXTENSION};
pub use memory_kv_store::InMemoryKeyValueStore;
