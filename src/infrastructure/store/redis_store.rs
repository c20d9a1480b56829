//! Redis-backed key/value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::ports::{KeyValueStore, StoreError, StoreRecord, StoreResult};

const KEY_PREFIX: &str = "dpa-guard:";

/// Redis store implementation.
///
/// Every value is stored as a JSON string under a namespaced key. Writes of
/// several keys go through a single `MULTI` pipeline, so the dataset and its
/// timestamp are always replaced together.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

fn build_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, keys: &[&'static str]) -> StoreResult<StoreRecord> {
        if keys.is_empty() {
            return Ok(StoreRecord::new());
        }

        let redis_keys: Vec<String> = keys.iter().map(|key| build_key(key)).collect();
        let mut conn = self.client.clone();

        let values: Vec<Option<String>> = conn
            .mget(&redis_keys)
            .await
            .map_err(|e| StoreError::OperationError(format!("Redis MGET failed: {}", e)))?;

        let mut record = StoreRecord::new();
        for (key, raw) in keys.iter().zip(values) {
            if let Some(raw) = raw {
                record.insert(key.to_string(), serde_json::from_str(&raw)?);
            }
        }

        debug!("Store GET: {}/{} keys present", record.len(), keys.len());
        Ok(record)
    }

    async fn set(&self, record: StoreRecord) -> StoreResult<()> {
        let mut pipe = redis::pipe();
        pipe.atomic();

        for (key, value) in &record {
            let redis_key = build_key(key);
            match value {
                Value::Null => {
                    pipe.del(redis_key).ignore();
                }
                value => {
                    pipe.set(redis_key, serde_json::to_string(value)?).ignore();
                }
            }
        }

        let mut conn = self.client.clone();
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(|e| StoreError::OperationError(format!("Redis write failed: {}", e)))?;

        debug!("Store SET: {} keys", record.len());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
