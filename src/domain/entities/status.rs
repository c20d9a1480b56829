//! User-facing review outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of outcomes used to pick a visual indicator.
///
/// `Unlisted` comes only from a failed match; `Default` is the fallback when
/// the page itself could not be resolved or no dataset is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Approved,
    Denied,
    StaffOnly,
    Pending,
    Unlisted,
    Default,
}

impl StatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::StaffOnly => "staff_only",
            Self::Pending => "pending",
            Self::Unlisted => "unlisted",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the UI sink receives for a tab: the category plus the installed-app flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusIndicator {
    pub category: StatusCategory,
    pub installed: bool,
}

impl StatusIndicator {
    pub fn new(category: StatusCategory, installed: bool) -> Self {
        Self {
            category,
            installed,
        }
    }

    /// Neutral indicator for pages that could not be evaluated.
    pub fn neutral() -> Self {
        Self::new(StatusCategory::Default, false)
    }
}
