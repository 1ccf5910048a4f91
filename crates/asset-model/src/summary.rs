//! Aggregate analytics payload.
//!
//! The summary is derived data: recomputed in full on every normalization
//! pass, never patched incrementally. Serialized field names are camelCase
//! because the payload is consumed by reporting clients as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-group (manufacturer or category) sub-totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBreakdown {
    pub count: usize,
    pub quantity: i64,
    pub active_count: usize,
    pub expired_count: usize,
}

/// Per-category lifecycle expiry counts relative to the reference date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleCounts {
    pub total_qty: i64,
    pub end_of_sale: usize,
    #[serde(rename = "endOfSWVuln")]
    pub end_of_sw_vuln: usize,
    pub last_day_support: usize,
    pub total: usize,
}

/// Full analytics summary for one normalized dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_records: usize,
    pub total_quantity: i64,
    pub manufacturer_count: usize,
    pub category_count: usize,
    pub active_support: usize,
    pub expired_support: usize,
    /// Alias of `active_support`; kept as a separate field because
    /// reporting clients read it under its own name.
    pub service_contracts: usize,
    pub manufacturer_breakdown: BTreeMap<String, GroupBreakdown>,
    pub category_breakdown: BTreeMap<String, GroupBreakdown>,
    /// Percentage (0-100, rounded) of records with usable data per field.
    pub field_completeness: BTreeMap<String, u32>,
    pub lifecycle_by_category: BTreeMap<String, LifecycleCounts>,
}
