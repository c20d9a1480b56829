//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::StatusService;
use crate::domain::ports::KeyValueStore;
use crate::infrastructure::indicator::IndicatorBoard;

#[derive(Clone)]
pub struct AppState {
    pub status_service: Arc<StatusService>,
    /// Same board the status service emits into, read back by the tab endpoints.
    pub indicators: Arc<IndicatorBoard>,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(
        status_service: Arc<StatusService>,
        indicators: Arc<IndicatorBoard>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            status_service,
            indicators,
            store,
        }
    }
}
