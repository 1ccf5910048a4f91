#![deny(unsafe_code)]

//! Fuzzy-free, table-driven header resolution.
//!
//! A single declarative synonym table maps vendor column headers onto the
//! canonical field set; anything it does not recognize is preserved under a
//! slugified key so no source column is ever lost.

pub mod resolver;
pub mod synonyms;

pub use resolver::{HeaderResolver, normalize_header, slugify};
pub use synonyms::{SynonymEntry, SynonymTable};
