//! Handler for the UI status query.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::status::{StatusQuery, StatusResponse};
use crate::state::AppState;

/// Reports identity, matched record, and category for a URL.
///
/// # Endpoint
///
/// `GET /api/status?url=https://www.khanacademy.org/math`
///
/// # Response
///
/// Always `200 OK`. Failures are reported in the body:
///
/// ```json
/// { "error": "DPA data not yet loaded." }
/// ```
pub async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Json<StatusResponse> {
    let reply = state.status_service.query(&query.url).await;
    Json(StatusResponse::from(reply))
}
