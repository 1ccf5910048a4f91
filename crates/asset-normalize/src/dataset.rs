//! Dataset normalization.

use std::panic::{AssertUnwindSafe, catch_unwind};

use asset_map::slugify;
use asset_model::{RawRow, Record, fields};
use tracing::warn;

use crate::row::RowNormalizer;

/// Normalizes an ordered raw-row sequence into canonical records.
///
/// Order-preserving and strictly sequential, so the assigned identifiers
/// are deterministic and reproducible across runs on the same input.
pub struct DatasetNormalizer {
    row: RowNormalizer,
}

impl DatasetNormalizer {
    pub fn new(row: RowNormalizer) -> Self {
        Self { row }
    }

    pub fn normalize_all(&self, rows: &[RawRow]) -> Vec<Record> {
        rows.iter()
            .enumerate()
            .map(|(index, raw)| {
                // One malformed row must not abort the batch: if anything in
                // row processing panics, the original row passes through
                // uncoerced in its place.
                let mut record = catch_unwind(AssertUnwindSafe(|| self.row.normalize(raw)))
                    .unwrap_or_else(|_| {
                        warn!(row = index + 1, "row normalization failed, passing through uncoerced");
                        passthrough_record(raw)
                    });
                if !has_id(&record) {
                    record.set(fields::ID, (index + 1) as i64);
                }
                record
            })
            .collect()
    }
}

impl Default for DatasetNormalizer {
    fn default() -> Self {
        Self::new(RowNormalizer::default())
    }
}

fn has_id(record: &Record) -> bool {
    record
        .get(fields::ID)
        .is_some_and(|value| !value.is_empty_marker())
}

/// The raw row rendered as a record without any coercion, keyed by slugs of
/// the original headers.
fn passthrough_record(raw: &RawRow) -> Record {
    let mut record = Record::new();
    for (header, value) in raw.iter() {
        let key = slugify(header);
        if key.is_empty() {
            continue;
        }
        record.set(key, value.to_text());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_model::RawValue;

    fn row(entries: &[(&str, &str)]) -> RawRow {
        entries
            .iter()
            .map(|(header, value)| ((*header).to_string(), RawValue::from(*value)))
            .collect()
    }

    #[test]
    fn assigns_sequential_ids() {
        let rows = vec![row(&[("Vendor", "A")]), row(&[("Vendor", "B")])];
        let records = DatasetNormalizer::default().normalize_all(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number("id"), Some(1.0));
        assert_eq!(records[1].number("id"), Some(2.0));
    }

    #[test]
    fn keeps_supplied_ids() {
        let rows = vec![row(&[("ID", "17"), ("Vendor", "A")])];
        let records = DatasetNormalizer::default().normalize_all(&rows);
        assert_eq!(records[0].number("id"), Some(17.0));
    }

    #[test]
    fn empty_dataset_is_valid() {
        let records = DatasetNormalizer::default().normalize_all(&[]);
        assert!(records.is_empty());
    }

    #[test]
    fn idempotent_on_same_input() {
        let rows = vec![
            row(&[("Vendor", "Cisco"), ("Qty", "2"), ("Coverage", "Covered")]),
            row(&[("Vendor", "HPE"), ("Qty", "5")]),
        ];
        let normalizer = DatasetNormalizer::default();
        assert_eq!(normalizer.normalize_all(&rows), normalizer.normalize_all(&rows));
    }

    #[test]
    fn passthrough_slugs_headers() {
        let mut raw = RawRow::new();
        raw.push("Ship Date", "junk");
        raw.push("***", "lost");
        let record = passthrough_record(&raw);
        assert_eq!(record.text("ship_date").as_deref(), Some("junk"));
        assert!(!record.contains(""));
    }
}
