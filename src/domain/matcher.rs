//! Finds the reference record describing a resolved identity.

use crate::domain::entities::{ReferenceRecord, SiteIdentity};
use crate::domain::identity::resolve;

/// Returns the first record in dataset order that matches `identity`.
///
/// - With an app id, only records whose `resource_link` resolves to the same
///   app id can match; hostnames are not consulted.
/// - Otherwise each record's hostname is the explicit `hostname` column, or
///   the host of its `resource_link`. Records with neither are skipped.
///   A record matches when the visited hostname equals it, or is a subdomain
///   of it. A stored subdomain never matches a visited parent domain.
pub fn find_match<'a>(
    identity: &SiteIdentity,
    records: &'a [ReferenceRecord],
) -> Option<&'a ReferenceRecord> {
    match identity.app_id() {
        Some(app_id) => records
            .iter()
            .find(|record| record_app_id(record).as_deref() == Some(app_id)),
        None => records.iter().find(|record| {
            record_hostname(record)
                .is_some_and(|stored| hostname_matches(identity.hostname(), &stored))
        }),
    }
}

/// Suffix containment in one direction: `sub.example.com` matches `example.com`.
pub fn hostname_matches(visited: &str, stored: &str) -> bool {
    if stored.is_empty() {
        return false;
    }
    visited == stored
        || visited
            .strip_suffix(stored)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn record_app_id(record: &ReferenceRecord) -> Option<String> {
    let link = record.resource_link.as_deref()?;
    resolve(link).ok()?.app_id().map(str::to_string)
}

fn record_hostname(record: &ReferenceRecord) -> Option<String> {
    if let Some(host) = record.hostname.as_deref() {
        let host = host.trim().to_ascii_lowercase();
        if !host.is_empty() {
            return Some(host);
        }
    }

    let link = record.resource_link.as_deref()?;
    resolve(link)
        .ok()
        .map(|identity| identity.hostname().to_string())
}
