//! Persisted key/value store implementations.
//!
//! Provides two implementations of [`crate::domain::ports::KeyValueStore`]:
//! - [`RedisStore`] - Redis-backed store shared across restarts and instances
//! - [`MemoryStore`] - in-process map for development, tests, and one-shot CLI runs

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
