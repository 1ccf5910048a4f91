//! End-to-end aggregation properties over normalized data.

use chrono::NaiveDate;
use proptest::prelude::{ProptestConfig, proptest};

use asset_analytics::aggregate;
use asset_model::{RawRow, RawValue, Record};
use asset_normalize::DatasetNormalizer;

fn raw_row(entries: &[(&str, &str)]) -> RawRow {
    entries
        .iter()
        .map(|(header, value)| ((*header).to_string(), RawValue::from(*value)))
        .collect()
}

fn reference_now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn summary_over_normalized_vendor_file() {
    let rows = vec![
        raw_row(&[
            ("Vendor", "Cisco"),
            ("Category", "Router"),
            ("Qty", "2"),
            ("Total Price", "$1,000.00"),
            ("Coverage", "Covered"),
            ("EOS Date", "2020-01-01"),
        ]),
        raw_row(&[
            ("Vendor", "Cisco"),
            ("Category", "Router"),
            ("Qty", "1"),
            ("Coverage", "Not Covered"),
            ("EOS Date", "2099-01-01"),
        ]),
        raw_row(&[("Supplier", "HPE"), ("Category", "Switch"), ("Qty", "4")]),
    ];
    let records = DatasetNormalizer::default().normalize_all(&rows);
    let summary = aggregate(&records, reference_now());

    assert_eq!(summary.total_records, 3);
    assert_eq!(summary.total_quantity, 7);
    assert_eq!(summary.manufacturer_count, 2);
    assert_eq!(summary.category_count, 2);
    assert_eq!(summary.active_support, 1);
    assert_eq!(summary.expired_support, 1);
    assert_eq!(summary.service_contracts, 1);

    let cisco = &summary.manufacturer_breakdown["Cisco"];
    assert_eq!(cisco.count, 2);
    assert_eq!(cisco.quantity, 3);
    assert_eq!(cisco.active_count, 1);
    assert_eq!(cisco.expired_count, 1);

    let router = &summary.lifecycle_by_category["Router"];
    assert_eq!(router.end_of_sale, 1);
    assert_eq!(router.total, 2);
    assert_eq!(router.total_qty, 3);
}

#[test]
fn recomputation_is_identical() {
    let rows = vec![
        raw_row(&[("Vendor", "Cisco"), ("Qty", "2"), ("Coverage", "Covered")]),
        raw_row(&[("Vendor", "HPE"), ("Qty", "5")]),
    ];
    let records = DatasetNormalizer::default().normalize_all(&rows);
    let first = aggregate(&records, reference_now());
    let second = aggregate(&records, reference_now());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn breakdown_conservation(
        rows in proptest::collection::vec(
            (
                proptest::option::of("[A-Za-z ]{0,12}"),
                proptest::option::of("[A-Za-z ]{0,12}"),
                0u32..500,
            ),
            0..24,
        )
    ) {
        let raw: Vec<RawRow> = rows
            .iter()
            .map(|(vendor, category, qty)| {
                let mut row = RawRow::new();
                if let Some(vendor) = vendor {
                    row.push("Vendor", vendor.as_str());
                }
                if let Some(category) = category {
                    row.push("Category", category.as_str());
                }
                row.push("Qty", f64::from(*qty));
                row
            })
            .collect();
        let records = DatasetNormalizer::default().normalize_all(&raw);
        let summary = aggregate(&records, reference_now());

        // Per-group counts and quantities sum back to the global totals.
        let group_count: usize = summary.manufacturer_breakdown.values().map(|g| g.count).sum();
        let group_qty: i64 = summary.manufacturer_breakdown.values().map(|g| g.quantity).sum();
        assert_eq!(group_count, summary.total_records);
        assert_eq!(group_qty, summary.total_quantity);

        let cat_count: usize = summary.category_breakdown.values().map(|g| g.count).sum();
        let cat_qty: i64 = summary.category_breakdown.values().map(|g| g.quantity).sum();
        assert_eq!(cat_count, summary.total_records);
        assert_eq!(cat_qty, summary.total_quantity);
    }

    #[test]
    fn completeness_bounds(
        values in proptest::collection::vec(proptest::option::of("[A-Za-z-]{0,8}"), 0..16)
    ) {
        let records: Vec<Record> = values
            .iter()
            .map(|value| {
                let mut record = Record::new();
                if let Some(value) = value {
                    record.set("mfg", value.as_str());
                }
                record
            })
            .collect();
        let summary = aggregate(&records, reference_now());
        for percent in summary.field_completeness.values() {
            assert!(*percent <= 100);
        }
        if records.is_empty() {
            assert!(summary.field_completeness.values().all(|p| *p == 0));
        }
    }
}
