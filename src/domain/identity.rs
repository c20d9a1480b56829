//! Identity resolution: turns an arbitrary URL string into a [`SiteIdentity`].
//!
//! Hostnames are kept whole (lowercased, subdomains included). Links to the
//! known app marketplaces additionally yield the application identifier,
//! extracted per store:
//!
//! | Store | Rule |
//! |---|---|
//! | Apple App Store | last path segment, only when the path contains `/app/` |
//! | Chrome Web Store | last path segment, when the path has more than two segments |
//! | Google Play Store | the `id` query parameter |
//! | Google Workspace | last path segment, when it matches `[A-Za-z0-9_-]+` |

use crate::domain::entities::{AppStore, SiteIdentity};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static WORKSPACE_APP_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid workspace id pattern"));

/// Reasons a string yields no identity.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Resolves a URL into a comparable site/app identity.
///
/// A missing scheme is treated as `https://`, so `"example.com"` resolves.
/// Failing to derive an app id never fails the whole resolution; the identity
/// is returned with `app_id = None`.
///
/// # Errors
///
/// Returns [`ResolutionError::Empty`] for blank input,
/// [`ResolutionError::InvalidFormat`] when the string cannot be parsed as a
/// URL, and [`ResolutionError::MissingHost`] for host-less URLs such as
/// `file:///tmp/x`.
///
/// # Examples
///
/// ```
/// use dpa_guard::domain::identity::resolve;
///
/// let identity = resolve("https://play.google.com/store/apps/details?id=com.example.app").unwrap();
/// assert_eq!(identity.app_id(), Some("com.example.app"));
/// assert!(identity.is_app_store_link());
///
/// assert!(resolve("not a url").is_err());
/// ```
pub fn resolve(input: &str) -> Result<SiteIdentity, ResolutionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ResolutionError::Empty);
    }

    let url = parse_with_default_scheme(input)?;

    let hostname = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or(ResolutionError::MissingHost)?
        .to_ascii_lowercase();

    let Some(store) = AppStore::from_host(&hostname) else {
        return Ok(SiteIdentity::site(hostname));
    };

    let app_id = extract_app_id(store, &url);
    if app_id.is_none() {
        tracing::debug!("No app id in {} link: {}", store.display_name(), input);
    }

    Ok(SiteIdentity::app_store_link(hostname, store, app_id))
}

/// Resolves an optional value, treating `None` like an empty string.
pub fn resolve_opt(input: Option<&str>) -> Result<SiteIdentity, ResolutionError> {
    resolve(input.unwrap_or_default())
}

fn parse_with_default_scheme(input: &str) -> Result<Url, ResolutionError> {
    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    Url::parse(&candidate).map_err(|e| ResolutionError::InvalidFormat(e.to_string()))
}

fn extract_app_id(store: AppStore, url: &Url) -> Option<String> {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.collect())
        .unwrap_or_default();
    let last = segments.last().copied().filter(|s| !s.is_empty());

    let app_id = match store {
        AppStore::Apple => last.filter(|_| url.path().contains("/app/")),
        AppStore::ChromeWebStore => last.filter(|_| segments.len() > 2),
        AppStore::GooglePlay => {
            return url
                .query_pairs()
                .find(|(key, _)| key == "id")
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty());
        }
        AppStore::GoogleWorkspace => last.filter(|s| WORKSPACE_APP_ID.is_match(s)),
    };

    app_id.map(str::to_string)
}
