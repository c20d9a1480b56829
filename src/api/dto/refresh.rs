//! DTOs for the manual refresh trigger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct RefreshQuery {
    /// Refetch even when the cached dataset is still fresh.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub available: bool,
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}
