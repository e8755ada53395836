//! Date parsing helpers for values typed in by administrators.

use chrono::NaiveDate;

/// Parse a result date, dropping any time of day.
///
/// Accepts:
/// - YYYY-MM-DD
/// - RFC3339 datetime (date part in its own offset)
/// - Naive datetime YYYY-MM-DDTHH:MM:SS
pub fn parse_result_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.date());
    }
    None
}
