//! Persisted key/value store trait and error types.

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    ConnectionError(String),

    #[error("Store operation error: {0}")]
    OperationError(String),

    #[error("Store value error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A set of JSON values keyed by name, as read from or written to the store.
pub type StoreRecord = Map<String, Value>;

/// Async key/value store holding the cached dataset and user settings.
///
/// Reads return only the requested keys that exist; writes replace the given
/// keys and leave all others untouched. A `null` value clears a key.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryStore`] - in-process map
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the values stored under `keys`. Missing keys are absent from the result.
    async fn get(&self, keys: &[&'static str]) -> StoreResult<StoreRecord>;

    /// Writes every entry of `record`.
    async fn set(&self, record: StoreRecord) -> StoreResult<()>;

    /// Checks if the store backend is reachable.
    async fn health_check(&self) -> bool;
}
