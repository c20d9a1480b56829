//! DTOs for the navigation trigger and per-tab indicators.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{StatusCategory, StatusIndicator};

/// A tab finished loading `url`.
#[derive(Debug, Deserialize, Validate)]
pub struct NavigationRequest {
    pub tab_id: u64,

    #[validate(length(min = 1, max = 8192, message = "URL must not be empty"))]
    pub url: String,
}

/// Indicator the UI should render for a tab.
#[derive(Debug, Serialize)]
pub struct IndicatorResponse {
    pub category: StatusCategory,
    pub installed: bool,
}

impl From<StatusIndicator> for IndicatorResponse {
    fn from(indicator: StatusIndicator) -> Self {
        Self {
            category: indicator.category,
            installed: indicator.installed,
        }
    }
}
