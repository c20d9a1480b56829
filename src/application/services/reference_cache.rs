//! Fetch-or-reuse policy for the reference dataset.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::domain::dataset::parse;
use crate::domain::entities::{ReferenceDataset, ReferenceRecord};
use crate::domain::ports::{Clock, DatasetFetcher, KeyValueStore, StoreRecord, StoreResult};

/// Store key holding the cached records.
pub const DPA_LIST_KEY: &str = "dpaList";
/// Store key holding the epoch millis of the last successful fetch.
pub const LAST_UPDATED_KEY: &str = "lastUpdated";
/// Store key holding the user-configured dataset URL.
pub const SOURCE_URL_KEY: &str = "sourceUrl";
/// Store key holding the URL of the form used to request a review.
pub const FORM_URL_KEY: &str = "formUrl";

/// Age after which a cached dataset is refetched.
pub const DEFAULT_STALENESS: Duration = Duration::from_secs(24 * 60 * 60);

/// Owns the cached reference dataset.
///
/// The dataset lives in the external [`KeyValueStore`]; this service decides
/// when to reuse it and when to refetch it. Failures never propagate: every
/// problem is logged and reported as "no dataset available" (`None`).
pub struct ReferenceCache {
    store: Arc<dyn KeyValueStore>,
    fetcher: Arc<dyn DatasetFetcher>,
    clock: Arc<dyn Clock>,
    staleness: Duration,
    default_source: Option<String>,
}

impl ReferenceCache {
    /// Creates a cache with the default 24-hour staleness threshold.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        fetcher: Arc<dyn DatasetFetcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            fetcher,
            clock,
            staleness: DEFAULT_STALENESS,
            default_source: None,
        }
    }

    pub fn with_staleness(mut self, staleness: Duration) -> Self {
        self.staleness = staleness;
        self
    }

    /// Source URL used when the store has no `sourceUrl` setting.
    pub fn with_default_source(mut self, source: Option<String>) -> Self {
        self.default_source = source.filter(|s| !s.trim().is_empty());
        self
    }

    /// Returns the current dataset, refetching it when stale or missing.
    ///
    /// - A cached dataset younger than the staleness threshold is returned
    ///   without any network access.
    /// - Without a configured source URL nothing can be fetched: `None`.
    /// - Otherwise the source is fetched, parsed, persisted, and returned.
    ///
    /// A failed refresh returns `None`; a stale cached dataset is not used
    /// as a fallback.
    pub async fn get_current(&self) -> Option<ReferenceDataset> {
        let stored = self.read_state().await?;
        let now = self.clock.now_millis();

        if let Some(dataset) = cached_dataset(&stored)
            && self.is_fresh(dataset.last_updated, now)
        {
            debug!("Using cached reference dataset ({} records)", dataset.len());
            return Some(dataset);
        }

        let Some(source) = self.resolve_source(&stored) else {
            info!("No reference source configured; nothing to refresh");
            return None;
        };

        debug!("Reference cache stale or missing, refreshing");
        self.fetch_and_store(&source, now).await
    }

    /// Refetches the dataset regardless of its age.
    pub async fn refresh(&self) -> Option<ReferenceDataset> {
        let stored = self.read_state().await?;
        let Some(source) = self.resolve_source(&stored) else {
            info!("No reference source configured; nothing to refresh");
            return None;
        };

        self.fetch_and_store(&source, self.clock.now_millis()).await
    }

    /// Returns the cached dataset as stored, without any network access.
    ///
    /// The dataset may be stale.
    pub async fn peek(&self) -> Option<ReferenceDataset> {
        cached_dataset(&self.read_state().await?)
    }

    /// Returns the effective source URL, if any.
    pub async fn source_url(&self) -> Option<String> {
        let stored = self.read_state().await?;
        self.resolve_source(&stored)
    }

    /// Saves the user's source URL and invalidates the cached dataset.
    ///
    /// Resetting `lastUpdated` to `0` makes the next [`Self::get_current`]
    /// refetch. A blank `url` clears the setting.
    ///
    /// # Errors
    ///
    /// Returns the store error when the settings cannot be written.
    pub async fn configure_source(&self, url: &str) -> StoreResult<()> {
        let mut record = StoreRecord::new();
        record.insert(SOURCE_URL_KEY.to_string(), setting_value(url));
        record.insert(LAST_UPDATED_KEY.to_string(), json!(0));
        self.store.set(record).await?;

        info!("Reference source updated; cache invalidated");
        Ok(())
    }

    /// Returns the stored review-request form URL, if any.
    pub async fn form_url(&self) -> Option<String> {
        let stored = self.read_state().await?;
        non_blank(stored.get(FORM_URL_KEY))
    }

    /// Saves the review-request form URL. A blank `url` clears the setting.
    ///
    /// The cached dataset is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the store error when the setting cannot be written.
    pub async fn configure_form(&self, url: &str) -> StoreResult<()> {
        let mut record = StoreRecord::new();
        record.insert(FORM_URL_KEY.to_string(), setting_value(url));
        self.store.set(record).await?;

        info!("Review form updated");
        Ok(())
    }

    async fn read_state(&self) -> Option<StoreRecord> {
        match self
            .store
            .get(&[DPA_LIST_KEY, LAST_UPDATED_KEY, SOURCE_URL_KEY, FORM_URL_KEY])
            .await
        {
            Ok(stored) => Some(stored),
            Err(e) => {
                warn!("Failed to read reference cache: {}", e);
                None
            }
        }
    }

    fn is_fresh(&self, last_updated: i64, now: i64) -> bool {
        let threshold = i64::try_from(self.staleness.as_millis()).unwrap_or(i64::MAX);
        now.saturating_sub(last_updated) < threshold
    }

    fn resolve_source(&self, stored: &StoreRecord) -> Option<String> {
        non_blank(stored.get(SOURCE_URL_KEY)).or_else(|| self.default_source.clone())
    }

    async fn fetch_and_store(&self, source: &str, now: i64) -> Option<ReferenceDataset> {
        let text = match self.fetcher.fetch(source).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Reference dataset fetch failed: {}", e);
                return None;
            }
        };

        let records = parse(&text);
        if records.is_empty() {
            warn!("Reference dataset contained no records");
        }

        let mut record = StoreRecord::new();
        match serde_json::to_value(&records) {
            Ok(list) => {
                record.insert(DPA_LIST_KEY.to_string(), list);
                record.insert(LAST_UPDATED_KEY.to_string(), json!(now));
                if let Err(e) = self.store.set(record).await {
                    warn!("Failed to persist reference dataset: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize reference dataset: {}", e),
        }

        info!("Fetched {} reference records", records.len());
        Some(ReferenceDataset::new(records, now))
    }
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Blank settings are stored as null, which clears the key.
fn setting_value(url: &str) -> Value {
    match url.trim() {
        "" => Value::Null,
        url => Value::String(url.to_string()),
    }
}

fn cached_dataset(stored: &StoreRecord) -> Option<ReferenceDataset> {
    let list = stored.get(DPA_LIST_KEY).filter(|v| !v.is_null())?;
    let last_updated = stored.get(LAST_UPDATED_KEY).and_then(|v| {
        v.as_i64()
            .or_else(|| v.as_f64().map(|millis| millis as i64))
    })?;

    match serde_json::from_value::<Vec<ReferenceRecord>>(list.clone()) {
        Ok(records) => Some(ReferenceDataset::new(records, last_updated)),
        Err(e) => {
            warn!("Ignoring unreadable cached dataset: {}", e);
            None
        }
    }
}
