//! Row normalization: header resolution plus field coercion.

use std::collections::BTreeMap;

use asset_map::HeaderResolver;
use asset_model::{RawRow, RawValue, Record, fields};

use crate::date::coerce_date;
use crate::numeric::{coerce_number, coerce_quantity};
use crate::support::{SupportScheme, coerce_support};

/// Turns one raw row into a canonical record.
///
/// Every header is resolved through the synonym table; duplicate-mapped
/// headers resolve last-write-wins in raw-row key order. Canonical fields
/// are then coerced, and any canonical field the row did not supply is
/// populated from the coercers' absent-input rules, so a record never
/// leaves here partially filled.
pub struct RowNormalizer {
    resolver: HeaderResolver,
    scheme: SupportScheme,
}

impl RowNormalizer {
    pub fn new(resolver: HeaderResolver, scheme: SupportScheme) -> Self {
        Self { resolver, scheme }
    }

    pub fn scheme(&self) -> SupportScheme {
        self.scheme
    }

    pub fn normalize(&self, row: &RawRow) -> Record {
        let mut mapped: BTreeMap<String, RawValue> = BTreeMap::new();
        for (header, value) in row.iter() {
            // BTreeMap insertion in key order gives last-write-wins for
            // duplicate-mapped headers.
            mapped.insert(self.resolver.resolve(header), value.clone());
        }

        let mut record = Record::new();
        for (field, value) in &mapped {
            match field.as_str() {
                fields::ID => {
                    if let Some(id) = supplied_id(value) {
                        record.set(fields::ID, id);
                    }
                }
                fields::QTY => record.set(fields::QTY, coerce_quantity(value)),
                fields::TOTAL_VALUE => record.set(fields::TOTAL_VALUE, coerce_number(value)),
                fields::SUPPORT_COVERAGE => {
                    record.set(fields::SUPPORT_COVERAGE, coerce_support(value, self.scheme));
                }
                name if fields::DATE_FIELDS.contains(&name) => {
                    record.set(field.clone(), coerce_date(value));
                }
                name if fields::is_canonical(name) => {
                    record.set(field.clone(), canonical_text(value));
                }
                // Slug-preserved extra column: keep the value verbatim.
                _ => record.set(field.clone(), value.to_text()),
            }
        }

        for field in fields::CANONICAL {
            if record.contains(field) || field == fields::ID {
                continue;
            }
            match field {
                fields::QTY => record.set(field, coerce_quantity(&RawValue::Missing)),
                fields::TOTAL_VALUE => record.set(field, coerce_number(&RawValue::Missing)),
                fields::SUPPORT_COVERAGE => {
                    record.set(field, coerce_support(&RawValue::Missing, self.scheme));
                }
                name if fields::DATE_FIELDS.contains(&name) => {
                    record.set(field, coerce_date(&RawValue::Missing));
                }
                _ => record.set(field, fields::SENTINEL),
            }
        }

        record
    }
}

impl Default for RowNormalizer {
    fn default() -> Self {
        Self::new(HeaderResolver::default(), SupportScheme::Lenient)
    }
}

/// A supplied id is kept only when it is a positive integer; anything else
/// is treated as absent so the dataset normalizer assigns a sequential one.
fn supplied_id(value: &RawValue) -> Option<i64> {
    let parsed = match value {
        RawValue::Missing => return None,
        RawValue::Number(number) => {
            if number.fract() == 0.0 {
                Some(*number as i64)
            } else {
                None
            }
        }
        RawValue::Text(text) => text.trim().parse::<i64>().ok(),
    };
    parsed.filter(|id| *id > 0)
}

/// Free-text canonical fields: blank input folds to the sentinel.
fn canonical_text(value: &RawValue) -> String {
    if value.is_blank() {
        fields::SENTINEL.to_string()
    } else {
        value.to_text()
    }
}
