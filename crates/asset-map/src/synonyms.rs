//! The canonical synonym table.
//!
//! A single ordered data structure drives header resolution. Entry order is
//! the overlap tie-break: if two lists ever contained the same synonym, the
//! earlier-declared canonical field would win.

use serde::Serialize;

use asset_model::fields;

/// One canonical field together with the vendor headers that map to it.
#[derive(Debug, Clone, Serialize)]
pub struct SynonymEntry {
    pub field: &'static str,
    pub synonyms: &'static [&'static str],
}

/// Ordered synonym table. Matching is exact against lowercased, trimmed
/// headers; the lists themselves are stored pre-normalized.
#[derive(Debug, Clone, Serialize)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    /// The built-in table covering the vendor vocabularies seen in practice.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                SynonymEntry {
                    field: fields::ID,
                    synonyms: &["id", "record id", "row id", "line id", "item id", "#"],
                },
                SynonymEntry {
                    field: fields::MFG,
                    synonyms: &[
                        "mfg",
                        "manufacturer",
                        "vendor",
                        "supplier",
                        "make",
                        "brand",
                        "oem",
                        "vendor name",
                        "manufacturer name",
                    ],
                },
                SynonymEntry {
                    field: fields::CATEGORY,
                    synonyms: &[
                        "category",
                        "device category",
                        "product category",
                        "product family",
                        "family",
                        "class",
                        "equipment category",
                    ],
                },
                SynonymEntry {
                    field: fields::ASSET_TYPE,
                    synonyms: &["asset type", "asset class", "device type", "equipment type"],
                },
                SynonymEntry {
                    field: fields::TYPE,
                    synonyms: &["type", "model", "model type", "item type"],
                },
                SynonymEntry {
                    field: fields::PRODUCT_ID,
                    synonyms: &[
                        "product id",
                        "product number",
                        "part number",
                        "part no",
                        "part #",
                        "pid",
                        "sku",
                        "model number",
                        "model no",
                    ],
                },
                SynonymEntry {
                    field: fields::DESCRIPTION,
                    synonyms: &[
                        "description",
                        "desc",
                        "item description",
                        "product description",
                        "product name",
                    ],
                },
                SynonymEntry {
                    field: fields::SHIP_DATE,
                    synonyms: &[
                        "ship date",
                        "shipped",
                        "date shipped",
                        "shipping date",
                        "ship dt",
                        "purchase date",
                        "install date",
                    ],
                },
                SynonymEntry {
                    field: fields::QTY,
                    synonyms: &["qty", "quantity", "count", "units", "item quantity"],
                },
                SynonymEntry {
                    field: fields::TOTAL_VALUE,
                    synonyms: &[
                        "total value",
                        "value",
                        "total price",
                        "price",
                        "cost",
                        "total cost",
                        "extended price",
                        "amount",
                        "list price",
                    ],
                },
                SynonymEntry {
                    field: fields::SUPPORT_COVERAGE,
                    synonyms: &[
                        "support coverage",
                        "coverage",
                        "coverage status",
                        "support status",
                        "contract status",
                        "covered",
                        "covered line status",
                        "service contract",
                        "service contract status",
                    ],
                },
                SynonymEntry {
                    field: fields::END_OF_SALE,
                    synonyms: &[
                        "end of sale",
                        "end of sale date",
                        "eos",
                        "eos date",
                        "last order date",
                        "end-of-sale",
                    ],
                },
                SynonymEntry {
                    field: fields::LAST_DAY_SUPPORT,
                    synonyms: &[
                        "last day support",
                        "last day of support",
                        "ldos",
                        "ldos date",
                        "end of support",
                        "end of support date",
                        "last support date",
                        "last support",
                    ],
                },
            ],
        }
    }

    /// Looks up a pre-normalized header; returns the canonical field of the
    /// first entry whose list contains it.
    pub fn lookup(&self, normalized: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.synonyms.contains(&normalized))
            .map(|entry| entry.field)
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_canonical_field() {
        let table = SynonymTable::builtin();
        let covered: Vec<&str> = table.entries().iter().map(|entry| entry.field).collect();
        for field in fields::CANONICAL {
            assert!(covered.contains(&field), "missing entry for {field}");
        }
    }

    #[test]
    fn synonym_lists_do_not_overlap() {
        let table = SynonymTable::builtin();
        let mut seen = std::collections::BTreeSet::new();
        for entry in table.entries() {
            for synonym in entry.synonyms {
                assert!(seen.insert(*synonym), "duplicate synonym: {synonym}");
            }
        }
    }

    #[test]
    fn synonyms_are_stored_pre_normalized() {
        let table = SynonymTable::builtin();
        for entry in table.entries() {
            for synonym in entry.synonyms {
                assert_eq!(*synonym, synonym.to_lowercase().trim());
            }
        }
    }
}
