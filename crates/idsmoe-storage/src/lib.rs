//! Key-value store backends for the ids.moe lookup service.

pub mod memory;
pub mod redis;

pub use idsmoe_core::{KeyValueStore, StorageError};
pub use memory::InMemoryStore;
pub use self::redis::RedisStore;
