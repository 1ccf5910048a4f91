#![deny(unsafe_code)]

//! Aggregate analytics over normalized inventory records.

pub mod aggregate;
pub mod paginate;

pub use aggregate::{COMPLETENESS_FIELDS, UNCATEGORIZED, UNKNOWN_MANUFACTURER, aggregate, expired_by};
pub use paginate::paginate;
