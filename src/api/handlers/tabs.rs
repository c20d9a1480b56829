//! Handlers for per-tab indicator state.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::navigation::IndicatorResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Latest indicator emitted for a tab.
///
/// # Endpoint
///
/// `GET /api/tabs/{tab_id}/indicator`
///
/// # Errors
///
/// Returns 404 if nothing was emitted for this tab yet.
pub async fn tab_indicator_handler(
    State(state): State<AppState>,
    Path(tab_id): Path<u64>,
) -> Result<Json<IndicatorResponse>, AppError> {
    state
        .indicators
        .latest(tab_id)
        .map(|indicator| Json(IndicatorResponse::from(indicator)))
        .ok_or_else(|| AppError::not_found("No indicator for tab", json!({ "tab_id": tab_id })))
}

/// Forgets a closed tab.
///
/// `DELETE /api/tabs/{tab_id}` - always `204 No Content`.
pub async fn tab_closed_handler(
    State(state): State<AppState>,
    Path(tab_id): Path<u64>,
) -> StatusCode {
    state.indicators.remove(tab_id);
    StatusCode::NO_CONTENT
}
