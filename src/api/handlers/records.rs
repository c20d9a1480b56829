//! Handlers for the reference record viewer.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::pagination::PaginationMeta;
use crate::api::dto::records::{RecordsListResponse, RecordsQuery};
use crate::domain::entities::ReferenceRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists reference records, optionally filtered by name.
///
/// # Endpoint
///
/// `GET /api/records`
///
/// # Query Parameters
///
/// - `q` (optional): Matches software or vendor name, case-insensitive
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, max: 500)
///
/// # Errors
///
/// - 400 Bad Request if pagination parameters are invalid
/// - 503 Service Unavailable if no dataset is loaded
pub async fn records_list_handler(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Json<RecordsListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let term = params.q.as_deref().unwrap_or_default();
    let records = state.status_service.search_records(term).await?;

    let pagination = PaginationMeta::new(&params.pagination, records.len());
    let items = records.into_iter().skip(offset).take(limit).collect();

    Ok(Json(RecordsListResponse { pagination, items }))
}

/// Returns a single reference record.
///
/// # Endpoint
///
/// `GET /api/records/{id}`
///
/// # Errors
///
/// - 404 Not Found if no record has this id
/// - 503 Service Unavailable if no dataset is loaded
pub async fn record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReferenceRecord>, AppError> {
    let record = state.status_service.find_record(&id).await?;
    Ok(Json(record))
}
