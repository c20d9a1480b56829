//! Handlers for runtime settings.
//!
//! Source URLs are echoed with their query string masked, since published
//! sheet links often carry access keys there.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::settings::{
    SettingsRequest, SettingsResponse, SourceSettingsRequest, SourceSettingsResponse,
};
use crate::application::services::ReferenceCache;
use crate::config::mask_query;
use crate::domain::ports::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the effective source URL and the review form URL.
///
/// `GET /api/settings`
pub async fn get_settings_handler(State(state): State<AppState>) -> Json<SettingsResponse> {
    let cache = state.status_service.cache();
    Json(SettingsResponse::masked(
        cache.source_url().await,
        cache.form_url().await,
    ))
}

/// Replaces both settings and invalidates the cached dataset.
///
/// # Endpoint
///
/// `PUT /api/settings`
///
/// # Request Body
///
/// ```json
/// {
///   "source_url": "https://docs.google.com/spreadsheets/d/<id>/export?format=csv",
///   "form_url": "https://forms.gle/<id>"
/// }
/// ```
///
/// A null or missing field clears that setting.
///
/// # Errors
///
/// - 400 Bad Request if either URL is malformed
/// - 500 Internal Server Error if the store rejects the write
pub async fn put_settings_handler(
    State(state): State<AppState>,
    Json(payload): Json<SettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    payload.validate()?;

    let cache = state.status_service.cache();
    cache
        .configure_source(payload.source_url())
        .await
        .map_err(save_failed)?;
    cache
        .configure_form(payload.form_url())
        .await
        .map_err(save_failed)?;

    let source_url = log_source(cache).await;
    Ok(Json(SettingsResponse::masked(
        source_url,
        cache.form_url().await,
    )))
}

/// Returns the effective dataset source URL.
///
/// `GET /api/settings/source`
pub async fn get_source_handler(State(state): State<AppState>) -> Json<SourceSettingsResponse> {
    let source_url = state.status_service.cache().source_url().await;
    Json(SourceSettingsResponse::masked(source_url))
}

/// Saves the dataset source URL and invalidates the cached dataset.
///
/// # Endpoint
///
/// `PUT /api/settings/source`
///
/// # Request Body
///
/// ```json
/// { "source_url": "https://docs.google.com/spreadsheets/d/<id>/export?format=csv" }
/// ```
///
/// `null` clears the stored URL, falling back to `SOURCE_URL` if set.
///
/// # Errors
///
/// - 400 Bad Request if the URL is malformed
/// - 500 Internal Server Error if the store rejects the write
pub async fn put_source_handler(
    State(state): State<AppState>,
    Json(payload): Json<SourceSettingsRequest>,
) -> Result<Json<SourceSettingsResponse>, AppError> {
    payload.validate()?;

    let cache = state.status_service.cache();
    cache
        .configure_source(payload.normalized())
        .await
        .map_err(save_failed)?;

    let source_url = log_source(cache).await;
    Ok(Json(SourceSettingsResponse::masked(source_url)))
}

async fn log_source(cache: &ReferenceCache) -> Option<String> {
    let source_url = cache.source_url().await;
    tracing::info!(
        "Source set to {}",
        source_url.as_deref().map(mask_query).unwrap_or_else(|| "none".to_string())
    );
    source_url
}

fn save_failed(e: StoreError) -> AppError {
    tracing::error!("Failed to save settings: {}", e);
    AppError::internal("Failed to save settings", json!({}))
}
