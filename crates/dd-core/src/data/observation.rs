//! Observation rows
//!
//! An observation is one billing period: energy usage, optionally a predictor
//! value, any number of degree-day aggregates and the period bounds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::FieldValue;

/// Field holding the dependent variable
pub const USAGE_FIELD: &str = "usage";
/// Field holding the auxiliary predictor
pub const PREDICTOR_FIELD: &str = "predictor_1";
/// Field holding the start of the billing period
pub const BEGIN_PERIOD_FIELD: &str = "begin_period";
/// Field holding the end of the billing period
pub const END_PERIOD_FIELD: &str = "end_period";

/// A single observation row, fields kept in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation {
    fields: IndexMap<String, FieldValue>,
}

impl Observation {
    /// Create an empty observation
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Get a field as a finite number
    pub fn finite(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_finite)
    }

    /// Usage value, if present and finite
    pub fn usage(&self) -> Option<f64> {
        self.finite(USAGE_FIELD)
    }

    /// Predictor value, if present and finite
    pub fn predictor(&self) -> Option<f64> {
        self.finite(PREDICTOR_FIELD)
    }

    /// Billing period bounds
    pub fn period(&self) -> Period {
        let bound = |name: &str| {
            self.get(name)
                .filter(|v| !v.is_null())
                .map(|v| v.to_string())
        };

        Period {
            begin: bound(BEGIN_PERIOD_FIELD),
            end: bound(END_PERIOD_FIELD),
        }
    }

    /// Field names in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the observation has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Observation
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Bounds of a billing period, as display strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub begin: Option<String>,
    pub end: Option<String>,
}

impl Period {
    /// Check if neither bound is known
    pub fn is_empty(&self) -> bool {
        self.begin.is_none() && self.end.is_none()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.begin, &self.end) {
            (Some(begin), Some(end)) => write!(f, "{} – {}", begin, end),
            (Some(begin), None) => write!(f, "from {}", begin),
            (None, Some(end)) => write!(f, "until {}", end),
            (None, None) => Ok(()),
        }
    }
}
