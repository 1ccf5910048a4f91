//! Raw input rows as produced by the decoding layer.
//!
//! Decoders emit loosely-typed scalars (text, numbers, or nothing at all
//! depending on the source format). They are folded into a single variant
//! type at the ingestion boundary so the coercers only ever see two shapes.

use serde::{Deserialize, Serialize};

/// A loosely-typed scalar from the decoding layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Missing,
}

impl RawValue {
    /// True for an absent value or blank text.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }

    /// The value rendered as text; `Missing` renders empty.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Text(text) => text.clone(),
            RawValue::Number(number) => crate::record::format_number(*number),
            RawValue::Missing => String::new(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// One raw row: an ordered mapping from the original column header to a
/// scalar value. Order matters because duplicate-mapped headers resolve
/// last-write-wins in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub entries: Vec<(String, RawValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: impl Into<String>, value: impl Into<RawValue>) {
        self.entries.push((header.into(), value.into()));
    }

    pub fn get(&self, header: &str) -> Option<&RawValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (String, RawValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
