//! Reduces the T&L and DPA review statuses to one [`StatusCategory`].

use crate::domain::entities::StatusCategory;

const BLANK: &str = "(blank)";

/// Classifies a pair of raw review statuses.
///
/// Inputs are trimmed, missing or empty values become `(blank)`, and the
/// misspelling `Recieved` is read as `Received`. First match wins:
///
/// 1. T&L `Rejected` → [`StatusCategory::Denied`]
/// 2. DPA `Denied` → [`StatusCategory::StaffOnly`]
/// 3. T&L `Approved`/`Not Required` and DPA `Received`/`Not Required` →
///    [`StatusCategory::Approved`]
/// 4. anything else → [`StatusCategory::Pending`]
///
/// Never returns `Unlisted` or `Default`.
pub fn classify(tl_status: Option<&str>, dpa_status: Option<&str>) -> StatusCategory {
    let tl = canonical(tl_status);
    let dpa = canonical(dpa_status);

    if tl == "Rejected" {
        return StatusCategory::Denied;
    }
    if dpa == "Denied" {
        return StatusCategory::StaffOnly;
    }

    let tl_cleared = matches!(tl, "Approved" | "Not Required");
    let dpa_cleared = matches!(dpa, "Received" | "Not Required");
    if tl_cleared && dpa_cleared {
        return StatusCategory::Approved;
    }

    StatusCategory::Pending
}

fn canonical(status: Option<&str>) -> &str {
    match status.map(str::trim) {
        None | Some("") => BLANK,
        Some("Recieved") => "Received",
        Some(s) => s,
    }
}
