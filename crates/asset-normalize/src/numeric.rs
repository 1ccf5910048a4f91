//! Numeric coercion.

use asset_model::{RawValue, fields};

/// Coerces a raw value to a number, stripping currency symbols and
/// thousands separators first. Sentinel inputs and parse failures yield `0`.
pub fn coerce_number(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(number) => *number,
        RawValue::Missing => 0.0,
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if fields::is_empty_marker(trimmed) {
                return 0.0;
            }
            let cleaned: String = trimmed
                .chars()
                .filter(|ch| *ch != '$' && *ch != ',')
                .collect();
            cleaned.trim().parse::<f64>().unwrap_or(0.0)
        }
    }
}

/// Quantity coercion: numeric coercion clamped to non-negative.
pub fn coerce_quantity(value: &RawValue) -> f64 {
    coerce_number(value).max(0.0)
}
