//! DTOs for runtime settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::mask_query;

/// Sets the dataset source URL, or clears it when `source_url` is null.
#[derive(Debug, Deserialize, Validate)]
pub struct SourceSettingsRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub source_url: Option<String>,
}

impl SourceSettingsRequest {
    /// The URL to persist, with blank input treated as "clear".
    pub fn normalized(&self) -> &str {
        trimmed(&self.source_url)
    }
}

/// The effective source URL with its query string masked.
#[derive(Debug, Serialize)]
pub struct SourceSettingsResponse {
    pub source_url: Option<String>,
}

impl SourceSettingsResponse {
    pub fn masked(source_url: Option<String>) -> Self {
        Self {
            source_url: source_url.as_deref().map(mask_query),
        }
    }
}

/// Replaces both user settings. A null or missing field clears that setting.
#[derive(Debug, Deserialize, Validate)]
pub struct SettingsRequest {
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub source_url: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Invalid URL format"))]
    pub form_url: Option<String>,
}

impl SettingsRequest {
    pub fn source_url(&self) -> &str {
        trimmed(&self.source_url)
    }

    pub fn form_url(&self) -> &str {
        trimmed(&self.form_url)
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub source_url: Option<String>,
    pub form_url: Option<String>,
}

impl SettingsResponse {
    pub fn masked(source_url: Option<String>, form_url: Option<String>) -> Self {
        Self {
            source_url: source_url.as_deref().map(mask_query),
            form_url,
        }
    }
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let request = SourceSettingsRequest {
            source_url: Some("https://sheet.example/export.csv".to_string()),
        };
        assert!(request.validate().is_ok());

        let request = SourceSettingsRequest {
            source_url: Some("not a url".to_string()),
        };
        assert!(request.validate().is_err());

        let request = SourceSettingsRequest { source_url: None };
        assert!(request.validate().is_ok());
        assert_eq!(request.normalized(), "");
    }

    #[test]
    fn test_settings_request_validates_both_urls() {
        let request = SettingsRequest {
            source_url: None,
            form_url: Some("forms".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("form_url"));

        let request = SettingsRequest {
            source_url: Some("https://sheet.example/a.csv".to_string()),
            form_url: None,
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.source_url(), "https://sheet.example/a.csv");
        assert_eq!(request.form_url(), "");
    }

    #[test]
    fn test_responses_mask_source_query() {
        let response = SettingsResponse::masked(
            Some("https://sheet.example/export?key=secret".to_string()),
            Some("https://forms.example/review?id=1".to_string()),
        );
        assert_eq!(
            response.source_url.as_deref(),
            Some("https://sheet.example/export?***")
        );
        assert_eq!(
            response.form_url.as_deref(),
            Some("https://forms.example/review?id=1")
        );
        assert!(SourceSettingsResponse::masked(None).source_url.is_none());
    }
}
