//! Typed regression result keys
//!
//! Multiple-regression results are keyed `"{temperature}_{predictor}"` by the
//! provider. [`ResultKey`] is the only place that format is produced or read,
//! and [`ResultIndex`] resolves keys against a loaded snapshot.

use indexmap::IndexMap;
use std::fmt;

use super::RegressionFamily;
use crate::error::{ChartError, Result};
use dd_core::data::{NONE_KEY, RegressionResult, RegressionResults};
use dd_core::fields::DegreeDayField;

/// Key of a precomputed regression result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultKey {
    /// Predictor-only fit
    PredictorOnly,
    /// Simple fit against one degree-day field
    Simple {
        /// Degree-day field name
        temperature: String,
    },
    /// Multiple fit against a degree-day field and the predictor
    Multiple {
        /// Degree-day field name
        temperature: String,
        /// Predictor name
        predictor: String,
    },
}

impl ResultKey {
    /// Simple-regression key
    pub fn simple(temperature: impl Into<String>) -> Self {
        ResultKey::Simple {
            temperature: temperature.into(),
        }
    }

    /// Multiple-regression key
    pub fn multiple(temperature: impl Into<String>, predictor: impl Into<String>) -> Self {
        ResultKey::Multiple {
            temperature: temperature.into(),
            predictor: predictor.into(),
        }
    }

    /// Result family the key belongs to
    pub fn family(&self) -> RegressionFamily {
        match self {
            ResultKey::Multiple { .. } => RegressionFamily::Multiple,
            ResultKey::PredictorOnly | ResultKey::Simple { .. } => RegressionFamily::Simple,
        }
    }

    /// Degree-day field of the key, if any
    pub fn temperature(&self) -> Option<&str> {
        match self {
            ResultKey::PredictorOnly => None,
            ResultKey::Simple { temperature } | ResultKey::Multiple { temperature, .. } => {
                Some(temperature)
            }
        }
    }

    /// Decode a raw multiple-regression key against the dataset's predictor
    /// name
    pub fn decode_multiple(raw: &str, predictor: &str) -> Result<Self> {
        let temperature = raw
            .strip_suffix(predictor)
            .and_then(|rest| rest.strip_suffix('_'))
            .filter(|rest| !rest.is_empty())
            .ok_or_else(|| ChartError::InvalidResultKey {
                key: raw.to_string(),
                message: format!("expected '{{temperature}}_{}'", predictor),
            })?;

        let field = DegreeDayField::parse(temperature)?;
        Ok(ResultKey::multiple(field.name, predictor))
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKey::PredictorOnly => write!(f, "{}", NONE_KEY),
            ResultKey::Simple { temperature } => write!(f, "{}", temperature),
            ResultKey::Multiple {
                temperature,
                predictor,
            } => write!(f, "{}_{}", temperature, predictor),
        }
    }
}

/// Regression results of one snapshot, indexed by typed key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultIndex {
    entries: IndexMap<ResultKey, RegressionResult>,
}

impl ResultIndex {
    /// Build the index for a snapshot.
    ///
    /// The predictor-only result is `none`, falling back to
    /// `simple_regressions["none"]`. Entries listed as `null` are left out.
    /// Multiple-regression keys that do not decode are skipped with a
    /// warning.
    pub fn build(results: &RegressionResults, predictor: &str) -> Self {
        let mut entries = IndexMap::new();

        let predictor_only = results.none.as_ref().or_else(|| results.simple(NONE_KEY));
        if let Some(result) = predictor_only {
            entries.insert(ResultKey::PredictorOnly, result.clone());
        }

        for (raw, result) in &results.simple_regressions {
            if raw == NONE_KEY {
                continue;
            }
            if let Some(result) = result {
                entries.insert(ResultKey::simple(raw.as_str()), result.clone());
            }
        }

        for (raw, result) in &results.multiple_regressions {
            // The "none" column belongs to the predictor-only table
            if raw == NONE_KEY {
                continue;
            }
            let Some(result) = result else {
                continue;
            };
            match ResultKey::decode_multiple(raw, predictor) {
                Ok(key) => {
                    entries.insert(key, result.clone());
                }
                Err(err) => {
                    tracing::warn!(key = %raw, predictor, error = %err, "skipping multiple-regression result");
                }
            }
        }

        Self { entries }
    }

    /// Look up a result
    pub fn get(&self, key: &ResultKey) -> Option<&RegressionResult> {
        self.entries.get(key)
    }

    /// Keys in snapshot order
    pub fn keys(&self) -> impl Iterator<Item = &ResultKey> {
        self.entries.keys()
    }

    /// Number of indexed results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no results are indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
