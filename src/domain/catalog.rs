//! Browsing helpers over the reference dataset.

use crate::domain::entities::ReferenceRecord;

/// Filters records by software or vendor name (case-insensitive substring).
///
/// A blank term returns every record. Dataset order is preserved.
pub fn search<'a>(records: &'a [ReferenceRecord], term: &str) -> Vec<&'a ReferenceRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            [&record.software_name, &record.vendor_name]
                .into_iter()
                .flatten()
                .any(|name| name.to_lowercase().contains(&term))
        })
        .collect()
}

/// Finds a record by its (possibly synthesized) id.
pub fn find_by_id<'a>(records: &'a [ReferenceRecord], id: &str) -> Option<&'a ReferenceRecord> {
    records.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ReferenceRecord> {
        let mut kami = ReferenceRecord::new("row-1");
        kami.software_name = Some("Kami".to_string());
        kami.vendor_name = Some("Kami Limited".to_string());

        let mut docs = ReferenceRecord::new("row-2");
        docs.software_name = Some("Google Docs".to_string());
        docs.vendor_name = Some("Google".to_string());

        let nameless = ReferenceRecord::new("row-3");

        vec![kami, docs, nameless]
    }

    #[test]
    fn test_search_by_software_name() {
        let records = records();
        let found = search(&records, "docs");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "row-2");
    }

    #[test]
    fn test_search_by_vendor_case_insensitive() {
        let records = records();
        let found = search(&records, "LIMITED");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "row-1");
    }

    #[test]
    fn test_blank_search_returns_all() {
        let records = records();
        assert_eq!(search(&records, "  ").len(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let records = records();
        assert_eq!(find_by_id(&records, "row-3").unwrap().id, "row-3");
        assert!(find_by_id(&records, "row-9").is_none());
    }
}
