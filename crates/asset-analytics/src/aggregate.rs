//! Summary aggregation over canonical records.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use asset_model::{GroupBreakdown, LifecycleCounts, Record, Summary, fields};
use asset_normalize::{ACTIVE, EXPIRED, parse_date};

/// Group label for records without a manufacturer.
pub const UNKNOWN_MANUFACTURER: &str = "Unknown";
/// Group label for records without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Fields scored for completeness. `id`, `qty` and `total_value` are
/// excluded because coercion always materializes them.
pub const COMPLETENESS_FIELDS: [&str; 10] = [
    fields::MFG,
    fields::CATEGORY,
    fields::ASSET_TYPE,
    fields::TYPE,
    fields::PRODUCT_ID,
    fields::DESCRIPTION,
    fields::SHIP_DATE,
    fields::SUPPORT_COVERAGE,
    fields::END_OF_SALE,
    fields::LAST_DAY_SUPPORT,
];

/// Computes the full summary for a record sequence against a reference date.
///
/// The pass is linear and side-effect free; an empty record set yields an
/// all-zero summary rather than a failure.
pub fn aggregate(records: &[Record], now: NaiveDate) -> Summary {
    let mut summary = Summary {
        total_records: records.len(),
        ..Summary::default()
    };

    let mut manufacturers: BTreeSet<String> = BTreeSet::new();
    let mut categories: BTreeSet<String> = BTreeSet::new();

    for record in records {
        // Re-coerced defensively in case a caller bypassed normalization.
        let quantity = record_quantity(record);
        summary.total_quantity += quantity;

        let status = record.text(fields::SUPPORT_COVERAGE).unwrap_or_default();
        let active = status == ACTIVE;
        let expired = status == EXPIRED;
        if active {
            summary.active_support += 1;
        }
        if expired {
            summary.expired_support += 1;
        }

        let manufacturer = group_key(record, fields::MFG, UNKNOWN_MANUFACTURER);
        let category = group_key(record, fields::CATEGORY, UNCATEGORIZED);
        manufacturers.insert(manufacturer.clone());
        categories.insert(category.clone());

        accumulate_group(
            summary.manufacturer_breakdown.entry(manufacturer).or_default(),
            quantity,
            active,
            expired,
        );
        accumulate_group(
            summary.category_breakdown.entry(category.clone()).or_default(),
            quantity,
            active,
            expired,
        );

        let lifecycle = summary.lifecycle_by_category.entry(category).or_default();
        lifecycle.total += 1;
        lifecycle.total_qty += quantity;
        if expired_by(record, fields::END_OF_SALE, now) {
            lifecycle.end_of_sale += 1;
        }
        if expired_by(record, fields::END_OF_SW_VULN, now) {
            lifecycle.end_of_sw_vuln += 1;
        }
        if expired_by(record, fields::LAST_DAY_SUPPORT, now) {
            lifecycle.last_day_support += 1;
        }
    }

    summary.manufacturer_count = manufacturers.len();
    summary.category_count = categories.len();
    summary.service_contracts = summary.active_support;
    summary.field_completeness = completeness(records);

    debug!(
        records = summary.total_records,
        manufacturers = summary.manufacturer_count,
        categories = summary.category_count,
        "aggregated summary"
    );
    summary
}

/// Whether a record's date field is parseable and on or before `now`.
/// Unparsable dates never count as expired.
pub fn expired_by(record: &Record, field: &str, now: NaiveDate) -> bool {
    let Some(value) = record.get(field).and_then(|value| value.as_str()) else {
        return false;
    };
    if fields::is_empty_marker(value) {
        return false;
    }
    match parse_date(value) {
        Some(date) => date <= now,
        None => false,
    }
}

fn record_quantity(record: &Record) -> i64 {
    match record.get(fields::QTY) {
        Some(value) => match value.as_f64() {
            Some(number) => number as i64,
            None => value
                .as_str()
                .map(|text| {
                    asset_normalize::coerce_quantity(&asset_model::RawValue::Text(
                        text.to_string(),
                    )) as i64
                })
                .unwrap_or(0),
        },
        None => 0,
    }
}

fn group_key(record: &Record, field: &str, fallback: &str) -> String {
    match record.get(field) {
        Some(value) if !value.is_empty_marker() => value.to_string(),
        _ => fallback.to_string(),
    }
}

fn accumulate_group(group: &mut GroupBreakdown, quantity: i64, active: bool, expired: bool) {
    group.count += 1;
    group.quantity += quantity;
    if active {
        group.active_count += 1;
    }
    if expired {
        group.expired_count += 1;
    }
}

/// Percentage (rounded to the nearest integer) of records with usable data
/// per scored field. Zero for an empty record set.
fn completeness(records: &[Record]) -> std::collections::BTreeMap<String, u32> {
    let mut scores = std::collections::BTreeMap::new();
    let total = records.len();
    for field in COMPLETENESS_FIELDS {
        let percent = if total == 0 {
            0
        } else {
            let complete = records
                .iter()
                .filter(|record| record.is_complete(field))
                .count();
            ((complete as f64 / total as f64) * 100.0).round() as u32
        };
        scores.insert(field.to_string(), percent);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (field, value) in entries {
            record.set(*field, *value);
        }
        record
    }

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn empty_dataset_yields_zero_summary() {
        let summary = aggregate(&[], now());
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.total_quantity, 0);
        assert!(summary.manufacturer_breakdown.is_empty());
        assert!(summary.field_completeness.values().all(|p| *p == 0));
    }

    #[test]
    fn unknown_groups_fold_not_drop() {
        let records = vec![record(&[("category", "-")])];
        let summary = aggregate(&records, now());
        assert_eq!(
            summary.manufacturer_breakdown[UNKNOWN_MANUFACTURER].count,
            1
        );
        assert_eq!(summary.category_breakdown[UNCATEGORIZED].count, 1);
    }

    #[test]
    fn lifecycle_counts_relative_to_now() {
        let records = vec![
            record(&[("category", "Router"), ("end_of_sale", "2020-01-01")]),
            record(&[("category", "Router"), ("end_of_sale", "2099-01-01")]),
        ];
        let summary = aggregate(&records, now());
        let lifecycle = &summary.lifecycle_by_category["Router"];
        assert_eq!(lifecycle.end_of_sale, 1);
        assert_eq!(lifecycle.total, 2);
    }

    #[test]
    fn unparsable_dates_never_expire() {
        let records = vec![record(&[
            ("category", "Switch"),
            ("end_of_sale", "sometime"),
            ("last_day_support", "-"),
        ])];
        let summary = aggregate(&records, now());
        let lifecycle = &summary.lifecycle_by_category["Switch"];
        assert_eq!(lifecycle.end_of_sale, 0);
        assert_eq!(lifecycle.last_day_support, 0);
    }

    #[test]
    fn sw_vuln_field_read_from_extras() {
        let records = vec![record(&[
            ("category", "Router"),
            ("end_of_sw_vuln", "2023-06-30"),
        ])];
        let summary = aggregate(&records, now());
        assert_eq!(summary.lifecycle_by_category["Router"].end_of_sw_vuln, 1);
    }

    #[test]
    fn service_contracts_alias_active_support() {
        let records = vec![
            record(&[("support_coverage", "Active")]),
            record(&[("support_coverage", "Expired")]),
            record(&[("support_coverage", "Active")]),
        ];
        let summary = aggregate(&records, now());
        assert_eq!(summary.active_support, 2);
        assert_eq!(summary.expired_support, 1);
        assert_eq!(summary.service_contracts, summary.active_support);
    }

    #[test]
    fn completeness_is_rounded_percentage() {
        let records = vec![
            record(&[("mfg", "Cisco")]),
            record(&[("mfg", "-")]),
            record(&[("mfg", "HPE")]),
        ];
        let summary = aggregate(&records, now());
        assert_eq!(summary.field_completeness["mfg"], 67);
        assert_eq!(summary.field_completeness["description"], 0);
    }
}
