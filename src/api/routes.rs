//! API route configuration.

use crate::api::handlers::{
    get_settings_handler, get_source_handler, navigation_handler, put_settings_handler,
    put_source_handler, record_handler, records_list_handler, refresh_handler, status_handler,
    tab_closed_handler, tab_indicator_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /navigation`               - Navigation-completed trigger
/// - `GET    /status`                   - UI status query for a URL
/// - `GET    /tabs/{tab_id}/indicator`  - Latest indicator for a tab
/// - `DELETE /tabs/{tab_id}`            - Forget a closed tab
/// - `POST   /refresh`                  - Run the periodic check now
/// - `GET    /records`                  - Search reference records (paginated)
/// - `GET    /records/{id}`             - Single reference record
/// - `GET    /settings`                 - Source and review form URLs
/// - `PUT    /settings`                 - Replace both settings
/// - `GET    /settings/source`          - Effective dataset source URL
/// - `PUT    /settings/source`          - Set or clear the source URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/navigation", post(navigation_handler))
        .route("/status", get(status_handler))
        .route("/tabs/{tab_id}/indicator", get(tab_indicator_handler))
        .route("/tabs/{tab_id}", delete(tab_closed_handler))
        .route("/refresh", post(refresh_handler))
        .route("/records", get(records_list_handler))
        .route("/records/{id}", get(record_handler))
        .route(
            "/settings",
            get(get_settings_handler).put(put_settings_handler),
        )
        .route(
            "/settings/source",
            get(get_source_handler).put(put_source_handler),
        )
}
