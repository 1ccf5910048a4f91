#![deny(unsafe_code)]

//! Shared data model for the asset inventory normalizer.

pub mod error;
pub mod fields;
pub mod raw;
pub mod record;
pub mod summary;

pub use error::{AssetError, Result};
pub use raw::{RawRow, RawValue};
pub use record::{FieldValue, Record, format_number};
pub use summary::{GroupBreakdown, LifecycleCounts, Summary};
