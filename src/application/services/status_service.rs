//! Wires identity resolution, the reference cache, matching, and
//! classification together for each external trigger.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::application::services::ReferenceCache;
use crate::domain::catalog;
use crate::domain::classifier::classify;
use crate::domain::entities::{
    ReferenceDataset, ReferenceRecord, SiteIdentity, StatusCategory, StatusIndicator,
};
use crate::domain::identity::resolve;
use crate::domain::matcher::find_match;
use crate::domain::ports::StatusSink;
use crate::error::AppError;

/// Reply text when the queried URL cannot be resolved.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL.";
/// Reply text when no reference dataset is available.
pub const NOT_LOADED_MESSAGE: &str = "DPA data not yet loaded.";

/// Full answer to a UI status query.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub identity: SiteIdentity,
    pub matched_record: Option<ReferenceRecord>,
    pub category: StatusCategory,
    /// Where to request a review; only set for unlisted sites.
    pub form_url: Option<String>,
}

/// Result of a UI status query: a report, or a human-readable error.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusReply {
    Found(StatusReport),
    Error(String),
}

/// Orchestrates the status pipeline for navigation, timer, and UI triggers.
///
/// Each entry point runs to completion; the only suspension points are the
/// store and network calls made inside [`ReferenceCache`].
pub struct StatusService {
    cache: Arc<ReferenceCache>,
    sink: Arc<dyn StatusSink>,
}

impl StatusService {
    pub fn new(cache: Arc<ReferenceCache>, sink: Arc<dyn StatusSink>) -> Self {
        Self { cache, sink }
    }

    pub fn cache(&self) -> &ReferenceCache {
        &self.cache
    }

    /// Computes the indicator for a URL without emitting it.
    ///
    /// An unresolvable URL or a missing dataset yields the neutral indicator.
    pub async fn evaluate(&self, url: &str) -> StatusIndicator {
        let identity = match resolve(url) {
            Ok(identity) => identity,
            Err(e) => {
                debug!("Cannot resolve {}: {}", url, e);
                return StatusIndicator::neutral();
            }
        };

        let Some(dataset) = self.cache.get_current().await else {
            info!("No reference dataset available to check against");
            return StatusIndicator::neutral();
        };

        let (_, category) = categorize(&identity, &dataset);
        StatusIndicator::new(category, identity.is_installed_app())
    }

    /// Navigation-completed trigger: evaluates the page and emits its indicator.
    ///
    /// Non-`http(s)` pages are ignored and nothing is emitted.
    pub async fn handle_navigation(&self, tab_id: u64, url: &str) -> Option<StatusIndicator> {
        if !url.starts_with("http") {
            debug!("Ignoring navigation to non-http page in tab {}", tab_id);
            return None;
        }

        let indicator = self.evaluate(url).await;
        self.sink.emit(tab_id, indicator);
        Some(indicator)
    }

    /// Periodic-timer trigger: makes sure a current dataset is cached.
    ///
    /// Returns the number of available records, or `None` when no dataset
    /// could be obtained.
    pub async fn handle_timer(&self) -> Option<usize> {
        let dataset = self.cache.get_current().await?;
        debug!("Periodic check: {} reference records available", dataset.len());
        Some(dataset.len())
    }

    /// UI query trigger: identity, matched record, and category for a URL.
    pub async fn query(&self, url: &str) -> StatusReply {
        let Ok(identity) = resolve(url) else {
            return StatusReply::Error(INVALID_URL_MESSAGE.to_string());
        };

        let Some(dataset) = self.cache.get_current().await else {
            return StatusReply::Error(NOT_LOADED_MESSAGE.to_string());
        };

        let (matched, category) = categorize(&identity, &dataset);
        let form_url = if category == StatusCategory::Unlisted {
            self.cache.form_url().await
        } else {
            None
        };

        StatusReply::Found(StatusReport {
            matched_record: matched.cloned(),
            identity,
            category,
            form_url,
        })
    }

    /// Lists records whose software or vendor name contains `term`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when no dataset is available.
    pub async fn search_records(&self, term: &str) -> Result<Vec<ReferenceRecord>, AppError> {
        let dataset = self.require_dataset().await?;
        Ok(catalog::search(&dataset.records, term)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Looks up a record by id (the popup's deep link into the viewer).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when no dataset is available and
    /// [`AppError::NotFound`] when no record has this id.
    pub async fn find_record(&self, id: &str) -> Result<ReferenceRecord, AppError> {
        let dataset = self.require_dataset().await?;
        catalog::find_by_id(&dataset.records, id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Reference record not found", json!({ "id": id })))
    }

    async fn require_dataset(&self) -> Result<ReferenceDataset, AppError> {
        self.cache
            .get_current()
            .await
            .ok_or_else(|| AppError::unavailable(NOT_LOADED_MESSAGE, json!({})))
    }
}

fn categorize<'a>(
    identity: &SiteIdentity,
    dataset: &'a ReferenceDataset,
) -> (Option<&'a ReferenceRecord>, StatusCategory) {
    match find_match(identity, &dataset.records) {
        Some(record) => {
            let category = classify(
                record.current_tl_status.as_deref(),
                record.current_dpa_status.as_deref(),
            );
            info!("Site found: {}, Status: {}", identity.hostname(), category);
            (Some(record), category)
        }
        None => {
            info!("Site not in reference list: {}", identity.hostname());
            (None, StatusCategory::Unlisted)
        }
    }
}
