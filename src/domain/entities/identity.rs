//! Site/app identity derived from a URL.

use serde::Serialize;

/// App marketplaces whose links carry an application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppStore {
    #[serde(rename = "Apple App Store")]
    Apple,
    #[serde(rename = "Chrome Web Store")]
    ChromeWebStore,
    #[serde(rename = "Google Play Store")]
    GooglePlay,
    #[serde(rename = "Google Workspace App")]
    GoogleWorkspace,
}

impl AppStore {
    /// Known marketplace hosts. Matching is exact, never by subdomain.
    pub const HOSTS: [(&'static str, AppStore); 4] = [
        ("apps.apple.com", AppStore::Apple),
        ("chromewebstore.google.com", AppStore::ChromeWebStore),
        ("play.google.com", AppStore::GooglePlay),
        ("workspace.google.com", AppStore::GoogleWorkspace),
    ];

    /// Looks up the marketplace served from `host` (case-insensitive).
    pub fn from_host(host: &str) -> Option<Self> {
        Self::HOSTS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(host))
            .map(|(_, store)| *store)
    }

    /// Human-readable store name shown next to installed apps.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Apple => "Apple App Store",
            Self::ChromeWebStore => "Chrome Web Store",
            Self::GooglePlay => "Google Play Store",
            Self::GoogleWorkspace => "Google Workspace App",
        }
    }
}

/// Comparable identity of the page or app a URL points at.
///
/// Recomputed on every resolution; never persisted. An `app_id` is only ever
/// present together with an `app_store`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    hostname: String,
    app_store: Option<AppStore>,
    app_id: Option<String>,
}

impl SiteIdentity {
    /// Identity of a plain website.
    pub fn site(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            app_store: None,
            app_id: None,
        }
    }

    /// Identity of a marketplace link, with the app id when one was derived.
    pub fn app_store_link(
        hostname: impl Into<String>,
        store: AppStore,
        app_id: Option<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            app_store: Some(store),
            app_id,
        }
    }

    /// Lowercased host, subdomains included.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn app_store(&self) -> Option<AppStore> {
        self.app_store
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn is_app_store_link(&self) -> bool {
        self.app_store.is_some()
    }

    /// True when the identity names a concrete installed app.
    pub fn is_installed_app(&self) -> bool {
        self.app_id.is_some()
    }
}
