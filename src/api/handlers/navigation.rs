//! Handler for the navigation-completed trigger.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::navigation::{IndicatorResponse, NavigationRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Evaluates a page a tab just finished loading and records its indicator.
///
/// # Endpoint
///
/// `POST /api/navigation`
///
/// # Request Body
///
/// ```json
/// { "tab_id": 7, "url": "https://www.khanacademy.org/" }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: `{ "category": "approved", "installed": false }`
/// - **204 No Content**: non-`http(s)` page, nothing emitted
/// - **400 Bad Request**: empty URL
pub async fn navigation_handler(
    State(state): State<AppState>,
    Json(payload): Json<NavigationRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let emitted = state
        .status_service
        .handle_navigation(payload.tab_id, &payload.url)
        .await;

    Ok(match emitted {
        Some(indicator) => Json(IndicatorResponse::from(indicator)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
