//! DTOs for the reference record viewer.

use serde::{Deserialize, Serialize};

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::domain::entities::ReferenceRecord;

/// Query parameters for `GET /api/records`.
#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    /// Case-insensitive filter on software or vendor name.
    #[serde(default)]
    pub q: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Paginated list of reference records.
#[derive(Debug, Serialize)]
pub struct RecordsListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<ReferenceRecord>,
}
