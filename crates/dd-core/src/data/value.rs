//! Loosely typed observation values
//!
//! Observation rows arrive as JSON objects whose values may be numbers,
//! strings, booleans or `null`. A `FieldValue` keeps that distinction so the
//! point extractor can tell a usable number from anything else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value of an observation field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Missing or sanitized non-finite value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value (dates, labels, unparsed numbers)
    Text(String),
    /// Nested arrays or objects, kept verbatim
    Other(serde_json::Value),
}

impl FieldValue {
    /// Get the value as a finite number.
    ///
    /// Only genuine numbers qualify: numeric-looking strings and booleans are
    /// not coerced, and `NaN`/infinities are rejected.
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Get the value as text, if it is a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(FieldValue::Null, FieldValue::Number)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Number(v) => write!(f, "{}", v),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}
