//! Handler for the manual refresh trigger.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::refresh::{RefreshQuery, RefreshResponse};
use crate::state::AppState;

/// Runs the periodic check on demand.
///
/// # Endpoint
///
/// `POST /api/refresh` (add `?force=true` to refetch a fresh dataset)
///
/// # Response
///
/// ```json
/// { "available": true, "records": 412, "fetched_at": "2026-10-19T08:00:00Z" }
/// ```
pub async fn refresh_handler(
    State(state): State<AppState>,
    Query(query): Query<RefreshQuery>,
) -> Json<RefreshResponse> {
    let cache = state.status_service.cache();
    let dataset = if query.force {
        cache.refresh().await
    } else {
        cache.get_current().await
    };

    Json(match dataset {
        Some(dataset) => RefreshResponse {
            available: true,
            records: dataset.len(),
            fetched_at: dataset.fetched_at(),
        },
        None => RefreshResponse {
            available: false,
            records: 0,
            fetched_at: None,
        },
    })
}
