//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable (dataset may still be missing)
/// - **503 Service Unavailable**: Store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Store reachable" },
///     "dataset": { "status": "ok", "message": "412 records, fetched 2026-10-19T08:00:00+00:00" }
///   }
/// }
/// ```
///
/// A missing dataset reports `"status": "degraded"` without failing the check,
/// since it is expected until a source is configured.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let dataset_check = check_dataset(&state).await;

    let store_ok = store_check.is_ok();
    let status = match (store_ok, dataset_check.is_ok()) {
        (true, true) => "healthy",
        (true, false) => "degraded",
        (false, _) => "unhealthy",
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            dataset: dataset_check,
        },
    };

    if store_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    if state.store.health_check().await {
        CheckStatus::ok("Store reachable")
    } else {
        CheckStatus::error("Store connection failed")
    }
}

/// Looks at the cached dataset only; never triggers a fetch.
async fn check_dataset(state: &AppState) -> CheckStatus {
    match state.status_service.cache().peek().await {
        Some(dataset) => {
            let fetched = dataset
                .fetched_at()
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string());
            CheckStatus::ok(format!("{} records, fetched {}", dataset.len(), fetched))
        }
        None => CheckStatus::error("Reference dataset not loaded"),
    }
}
