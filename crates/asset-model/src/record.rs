//! Canonical records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields;

/// A typed value held by a canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            FieldValue::Int(int) => Some(*int as f64),
            FieldValue::Text(_) => None,
        }
    }

    /// True for values that count as "no data": the sentinel, blank text,
    /// and N/A spellings. Numbers always count as data.
    pub fn is_empty_marker(&self) -> bool {
        match self {
            FieldValue::Text(text) => fields::is_empty_marker(text),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => f.write_str(&format_number(*number)),
            FieldValue::Int(int) => write!(f, "{int}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

/// Formats a number without trailing zeros ("10.50" -> "10.5", "10.0" -> "10").
pub fn format_number(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// One normalized inventory record: canonical fields plus any slug-preserved
/// extras from unmapped source columns.
///
/// A record is never partially coerced. Every canonical field is populated
/// (with a real value or the sentinel) before it leaves the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Text content of a field; numbers are rendered, absent fields yield `None`.
    pub fn text(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(|value| value.to_string())
    }

    /// Numeric content of a field, if it holds a number.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(FieldValue::as_f64)
    }

    /// True when the field holds usable data (present and not an empty marker).
    pub fn is_complete(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|value| !value.is_empty_marker())
    }
}
