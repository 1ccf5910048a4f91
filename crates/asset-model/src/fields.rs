//! Canonical field names.
//!
//! Every normalized record exposes this fixed, ordered field set no matter
//! which vendor vocabulary the source file used. Input columns outside the
//! set are preserved under a slugified key rather than dropped.

/// Explicit "known absent / not applicable" marker. Distinct from an empty
/// string and from a parse failure.
pub const SENTINEL: &str = "-";

pub const ID: &str = "id";
pub const MFG: &str = "mfg";
pub const CATEGORY: &str = "category";
pub const ASSET_TYPE: &str = "asset_type";
pub const TYPE: &str = "type";
pub const PRODUCT_ID: &str = "product_id";
pub const DESCRIPTION: &str = "description";
pub const SHIP_DATE: &str = "ship_date";
pub const QTY: &str = "qty";
pub const TOTAL_VALUE: &str = "total_value";
pub const SUPPORT_COVERAGE: &str = "support_coverage";
pub const END_OF_SALE: &str = "end_of_sale";
pub const LAST_DAY_SUPPORT: &str = "last_day_support";

/// Non-canonical lifecycle date preserved through slug fallback; the
/// aggregator reads it from a record's extra fields when present.
pub const END_OF_SW_VULN: &str = "end_of_sw_vuln";

/// The canonical field set, in output order.
pub const CANONICAL: [&str; 13] = [
    ID,
    MFG,
    CATEGORY,
    ASSET_TYPE,
    TYPE,
    PRODUCT_ID,
    DESCRIPTION,
    SHIP_DATE,
    QTY,
    TOTAL_VALUE,
    SUPPORT_COVERAGE,
    END_OF_SALE,
    LAST_DAY_SUPPORT,
];

/// Fields whose values go through the date coercer.
pub const DATE_FIELDS: [&str; 3] = [SHIP_DATE, END_OF_SALE, LAST_DAY_SUPPORT];

/// Fields whose values go through the numeric coercer.
pub const NUMERIC_FIELDS: [&str; 2] = [QTY, TOTAL_VALUE];

/// Returns true for text values that count as "no data": the sentinel,
/// blank strings, and the usual N/A spellings.
pub fn is_empty_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == SENTINEL || trimmed.eq_ignore_ascii_case("n/a")
}

/// Returns true if `name` is a canonical field.
pub fn is_canonical(name: &str) -> bool {
    CANONICAL.contains(&name)
}
