//! Reference dataset parsing.
//!
//! The transport format is comma-separated text: the first non-blank line is
//! the header row, `\r\n` and `\n` line endings are both accepted, and fields
//! may be wrapped in double quotes to carry literal commas. Escaped quotes
//! (`""`) and quoted line breaks are not supported.

use crate::domain::entities::ReferenceRecord;

/// Parses raw tabular text into reference records.
///
/// - Header values are trimmed and name the columns of every following row.
/// - Blank lines are skipped.
/// - Missing trailing fields default to empty (absent); surplus fields are dropped.
/// - A record without an `id` column value gets `"row-N"`, where `N` is the
///   1-based position of the data row.
///
/// Input without a header and at least one data row yields no records.
pub fn parse(text: &str) -> Vec<ReferenceRecord> {
    let mut lines = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = split_fields(header_line)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let records: Vec<ReferenceRecord> = lines
        .enumerate()
        .map(|(index, line)| parse_row(&headers, line, index + 1))
        .collect();

    tracing::debug!(
        "Parsed {} reference records ({} columns)",
        records.len(),
        headers.len()
    );

    records
}

fn parse_row(headers: &[String], line: &str, position: usize) -> ReferenceRecord {
    let fields = split_fields(line);
    let mut record = ReferenceRecord::new(format!("row-{position}"));

    for (index, header) in headers.iter().enumerate() {
        let value = fields.get(index).map(String::as_str).unwrap_or_default();
        record.set_field(header, value);
    }

    record
}

/// Splits one line on commas, ignoring commas inside double quotes.
///
/// Quote characters toggle the quoted state and are not kept in the value.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);

    fields
}
