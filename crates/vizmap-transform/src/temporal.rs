//! Temporal axis detection.
//!
//! A row set becomes temporal only when **every** row's `x` parses as a
//! date; a single unparseable value demotes the whole series to an
//! ordinal axis. Only strings are tried, so numeric `x` values stay
//! numeric rather than being read as epoch timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

use vizmap_model::NormalizedRow;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Reads a resolved `x` as a timestamp: RFC 3339 first, then the common
/// date spellings upstream feeds use.
pub fn parse_point(value: &Value) -> Option<NaiveDateTime> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.naive_utc());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(stamp);
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// All-or-nothing detection over a row set. Empty input is not temporal.
pub fn detect_temporal(rows: &[NormalizedRow]) -> Option<Vec<NaiveDateTime>> {
    if rows.is_empty() {
        return None;
    }
    rows.iter().map(|row| parse_point(&row.x)).collect()
}
