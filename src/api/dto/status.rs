//! DTOs for the UI status query.

use serde::{Deserialize, Serialize};

use crate::application::services::{StatusReply, StatusReport};
use crate::domain::entities::{AppStore, ReferenceRecord, SiteIdentity, StatusCategory};

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub url: String,
}

/// Resolved identity of the queried page.
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store: Option<AppStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl From<&SiteIdentity> for IdentityDto {
    fn from(identity: &SiteIdentity) -> Self {
        Self {
            hostname: identity.hostname().to_string(),
            app_store: identity.app_store(),
            app_id: identity.app_id().map(str::to_string),
        }
    }
}

/// Either the full report or a human-readable error, both with status 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatusResponse {
    Found {
        identity: IdentityDto,
        matched_record: Option<ReferenceRecord>,
        category: StatusCategory,
        #[serde(skip_serializing_if = "Option::is_none")]
        form_url: Option<String>,
    },
    Error {
        error: String,
    },
}

impl From<StatusReply> for StatusResponse {
    fn from(reply: StatusReply) -> Self {
        match reply {
            StatusReply::Found(StatusReport {
                identity,
                matched_record,
                category,
                form_url,
            }) => StatusResponse::Found {
                identity: IdentityDto::from(&identity),
                matched_record,
                category,
                form_url,
            },
            StatusReply::Error(error) => StatusResponse::Error { error },
        }
    }
}
