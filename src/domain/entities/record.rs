//! Reference records describing reviewed resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One reviewed site or app from the reference dataset.
///
/// Immutable once parsed; the whole dataset is replaced on every refresh.
/// Empty strings are normalized to `None` so "absent" has one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_link: Option<String>,

    /// Explicit host override, checked before `resource_link`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tl_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_dpa_status: Option<String>,

    /// Free-text descriptive columns (purpose, resource type, privacy policy link, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ReferenceRecord {
    /// Creates a record with only an id; the remaining columns are absent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_link: None,
            hostname: None,
            software_name: None,
            vendor_name: None,
            current_tl_status: None,
            current_dpa_status: None,
            extra: BTreeMap::new(),
        }
    }

    /// Assigns a column by its header name.
    ///
    /// Known columns are recognised case-insensitively, with spaces and
    /// hyphens treated as underscores (`"Resource Link"` → `resource_link`).
    /// Everything else lands in [`Self::extra`] under the trimmed header.
    pub fn set_field(&mut self, header: &str, value: &str) {
        let value = non_empty(value);
        let slot = match canonical_header(header).as_str() {
            "id" => {
                if let Some(id) = value {
                    self.id = id;
                }
                return;
            }
            "resource_link" => &mut self.resource_link,
            "hostname" => &mut self.hostname,
            "software_name" => &mut self.software_name,
            "vendor_name" => &mut self.vendor_name,
            "current_tl_status" => &mut self.current_tl_status,
            "current_dpa_status" => &mut self.current_dpa_status,
            _ => {
                if let Some(value) = value {
                    self.extra.insert(header.trim().to_string(), value);
                }
                return;
            }
        };
        *slot = value;
    }

    /// Reads a descriptive column by header name.
    pub fn field(&self, header: &str) -> Option<&str> {
        match canonical_header(header).as_str() {
            "id" => Some(self.id.as_str()),
            "resource_link" => self.resource_link.as_deref(),
            "hostname" => self.hostname.as_deref(),
            "software_name" => self.software_name.as_deref(),
            "vendor_name" => self.vendor_name.as_deref(),
            "current_tl_status" => self.current_tl_status.as_deref(),
            "current_dpa_status" => self.current_dpa_status.as_deref(),
            _ => self.extra.get(header.trim()).map(String::as_str),
        }
    }
}

/// Ordered reference records plus the time of the fetch that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataset {
    pub records: Vec<ReferenceRecord>,
    /// Epoch milliseconds of the last successful fetch.
    pub last_updated: i64,
}

impl ReferenceDataset {
    pub fn new(records: Vec<ReferenceRecord>, last_updated: i64) -> Self {
        Self {
            records,
            last_updated,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_updated)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn canonical_header(header: &str) -> String {
    header
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
