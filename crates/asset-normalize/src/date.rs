//! Date coercion.
//!
//! Vendor files carry dates in whatever format their export tooling chose.
//! Parsed values are emitted as ISO calendar dates (`YYYY-MM-DD`); inputs
//! that do not parse are passed through unchanged so ambiguous or foreign
//! formats stay visible for manual inspection downstream.

use chrono::{NaiveDate, NaiveDateTime};

use asset_model::{RawValue, fields};

/// Coerces a raw value to an ISO calendar date string.
///
/// - `''`, `'-'`, `'N/A'` and absent values become the sentinel `-`.
/// - Parseable dates become `YYYY-MM-DD`.
/// - Everything else is returned unchanged (not the sentinel).
pub fn coerce_date(value: &RawValue) -> String {
    let text = match value {
        RawValue::Missing => return fields::SENTINEL.to_string(),
        RawValue::Number(number) => asset_model::format_number(*number),
        RawValue::Text(text) => text.clone(),
    };
    let trimmed = text.trim();
    if fields::is_empty_marker(trimmed) {
        return fields::SENTINEL.to_string();
    }
    match parse_date(trimmed) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => text,
    }
}

/// Parses a date string across the formats seen in vendor exports.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(date) = try_parse_date(trimmed) {
        return Some(date);
    }
    try_parse_datetime(trimmed).map(|dt| dt.date())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%Y%m%d",    // Compact: 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
    ];

    for fmt in &formats {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    None
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
        "%d-%b-%Y %H:%M:%S",
        "%d-%b-%Y %H:%M",
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    None
}
