//! Record pagination.
//!
//! Pagination applies to the record sequence only; the summary always
//! travels whole. Caller-supplied bounds are clamped, never rejected.

use asset_model::Record;

/// A clamped window over a record slice.
pub fn paginate(records: &[Record], offset: usize, limit: usize) -> &[Record] {
    let start = offset.min(records.len());
    let end = start.saturating_add(limit).min(records.len());
    &records[start..end]
}
