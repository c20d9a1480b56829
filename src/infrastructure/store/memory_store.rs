//! In-process key/value store.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{KeyValueStore, StoreError, StoreRecord, StoreResult};

/// A store that keeps everything in memory.
///
/// Used when Redis is not configured. Contents are lost on restart, so the
/// first lookup after startup always refetches the dataset.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<StoreRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (settings are not persisted)");
        Self::default()
    }

    /// Creates a store pre-populated with `record`.
    pub fn with_entries(record: StoreRecord) -> Self {
        Self {
            entries: Mutex::new(record),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, StoreRecord>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::OperationError("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&'static str]) -> StoreResult<StoreRecord> {
        let entries = self.lock()?;
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, record: StoreRecord) -> StoreResult<()> {
        let mut entries = self.lock()?;
        for (key, value) in record {
            if value.is_null() {
                entries.remove(&key);
            } else {
                entries.insert(key, value);
            }
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.entries.lock().is_ok()
    }
}
