//! Support-coverage status coercion.
//!
//! Two coercion schemes exist and are deliberately not interchangeable:
//!
//! - [`SupportScheme::Lenient`] keeps an explicit "unknown" sentinel and
//!   lets ambiguous values pass through verbatim.
//! - [`SupportScheme::Strict`] is fail-closed: anything that is not clear
//!   evidence of coverage becomes `Expired`.
//!
//! The scheme is a required constructor parameter of the row normalizer;
//! there is no implicit default or fallback between the two.

use asset_model::{RawValue, fields};

/// Canonical "covered" status value.
pub const ACTIVE: &str = "Active";
/// Canonical "not covered" status value.
pub const EXPIRED: &str = "Expired";

/// Which support-status coercion scheme to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportScheme {
    /// Vocabulary matching with an unknown sentinel and verbatim
    /// pass-through for ambiguous values.
    Lenient,
    /// Exact `ACTIVE`/`COVERED` match only; everything else expires.
    Strict,
}

/// Substring markers for covered lines under the lenient scheme.
const ACTIVE_MARKERS: [&str; 6] = ["covered", "active", "yes", "valid", "current", "maintenance"];
/// Substring markers for uncovered lines under the lenient scheme.
const EXPIRED_MARKERS: [&str; 3] = ["not covered", "no coverage", "expired"];

/// Coerces a raw value to a support-coverage status under the given scheme.
pub fn coerce_support(value: &RawValue, scheme: SupportScheme) -> String {
    match scheme {
        SupportScheme::Lenient => coerce_lenient(value),
        SupportScheme::Strict => coerce_strict(value),
    }
}

fn coerce_lenient(value: &RawValue) -> String {
    let text = match value {
        RawValue::Missing => return fields::SENTINEL.to_string(),
        RawValue::Number(number) => asset_model::format_number(*number),
        RawValue::Text(text) => text.clone(),
    };
    let trimmed = text.trim();
    if fields::is_empty_marker(trimmed) {
        return fields::SENTINEL.to_string();
    }
    let lower = trimmed.to_lowercase();
    // Negative phrases outrank the bare "covered" substring.
    if lower.contains("not covered") || lower.contains("no coverage") {
        return EXPIRED.to_string();
    }
    if ACTIVE_MARKERS.iter().any(|marker| lower.contains(marker))
        || matches!(lower.as_str(), "y" | "1" | "true")
    {
        return ACTIVE.to_string();
    }
    if EXPIRED_MARKERS.iter().any(|marker| lower.contains(marker))
        || matches!(lower.as_str(), "none" | "no" | "n" | "0" | "false")
    {
        return EXPIRED.to_string();
    }
    // Ambiguous values pass through verbatim.
    text
}

fn coerce_strict(value: &RawValue) -> String {
    let text = match value {
        RawValue::Missing => return EXPIRED.to_string(),
        RawValue::Number(number) => asset_model::format_number(*number),
        RawValue::Text(text) => text.clone(),
    };
    let trimmed = text.trim();
    if matches!(trimmed, "" | "-" | "." | "?" | "0") {
        return EXPIRED.to_string();
    }
    let upper = trimmed.to_uppercase();
    if upper == "ACTIVE" || upper == "COVERED" {
        ACTIVE.to_string()
    } else {
        EXPIRED.to_string()
    }
}
