#![deny(unsafe_code)]

//! Total, deterministic normalization of raw inventory rows.
//!
//! Every coercer in this crate is pure and total: unparsable input is
//! handled by sentinel or pass-through rules, never by an error. Re-running
//! on the same input always yields the same records.

pub mod dataset;
pub mod date;
pub mod numeric;
pub mod row;
pub mod support;

pub use dataset::DatasetNormalizer;
pub use date::{coerce_date, parse_date};
pub use numeric::{coerce_number, coerce_quantity};
pub use row::RowNormalizer;
pub use support::{ACTIVE, EXPIRED, SupportScheme, coerce_support};
