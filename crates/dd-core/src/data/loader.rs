//! Loading dataset snapshots from JSON
//!
//! The provider emits Python-flavoured JSON: bare `NaN` tokens and `"nan"`
//! strings stand in for missing numbers. `sanitize_json` rewrites those to
//! `null` before parsing so every numeric field surfaces as `Option<f64>`.

use serde::Deserialize;
use serde_json::Value;

use super::{DataError, Dataset, Observation, Parameters, RegressionResults, Result};

/// Bare tokens that are not valid JSON numbers
const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Provider envelope: `{"dataset": {"metadata": {...}, "usage_data": [...], ...}}`
#[derive(Debug, Default, Deserialize)]
struct DatasetEnvelope {
    #[serde(default)]
    metadata: Metadata,
    #[serde(default)]
    usage_data: Vec<Observation>,
    #[serde(default)]
    regression_results: RegressionResults,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    parameters: Parameters,
}

impl From<DatasetEnvelope> for Dataset {
    fn from(envelope: DatasetEnvelope) -> Self {
        Dataset::new(
            envelope.metadata.parameters,
            envelope.usage_data,
            envelope.regression_results,
        )
    }
}

impl Dataset {
    /// Parse a dataset snapshot from provider JSON.
    ///
    /// Accepts either the provider envelope or the flat
    /// `{parameters, observations, regression_results}` shape.
    pub fn from_json_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(DataError::Empty);
        }

        let sanitized = sanitize_json(text);
        let value: Value = serde_json::from_str(&sanitized)?;
        Self::from_json_value(value)
    }

    /// Build a dataset from an already parsed JSON document
    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(DataError::MissingSection("dataset"));
        };

        if let Some(inner) = root.remove("dataset") {
            let envelope: DatasetEnvelope = serde_json::from_value(inner)?;
            let dataset = Dataset::from(envelope);
            tracing::debug!(
                observations = dataset.n_obs(),
                "loaded dataset from provider envelope"
            );
            return Ok(dataset);
        }

        let is_flat = ["parameters", "observations", "regression_results"]
            .iter()
            .any(|section| root.contains_key(*section));
        if !is_flat {
            return Err(DataError::MissingSection("dataset"));
        }

        let dataset: Dataset = serde_json::from_value(Value::Object(root))?;
        tracing::debug!(observations = dataset.n_obs(), "loaded flat dataset");
        Ok(dataset)
    }
}

/// Replace non-finite encodings with `null`.
///
/// Bare `NaN`, `Infinity` and `-Infinity` tokens become `null`, as does a
/// `"nan"` string (any case) in value position. Text inside other string
/// literals is never touched.
pub fn sanitize_json(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut containers: Vec<u8> = Vec::new();
    let mut last: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'"' {
            let end = string_end(bytes, i);
            let literal = &text[i..end];
            if in_value_position(last, &containers) && is_nan_literal(literal) {
                out.push_str("null");
            } else {
                out.push_str(literal);
            }
            last = Some(b'"');
            i = end;
            continue;
        }

        match b {
            b'{' | b'[' => containers.push(b),
            b'}' | b']' => {
                containers.pop();
            }
            _ => {}
        }

        let at_boundary = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
        if at_boundary {
            if let Some(len) = non_finite_token(&bytes[i..]) {
                out.push_str("null");
                last = Some(b'l');
                i += len;
                continue;
            }
        }

        // Valid JSON is ASCII outside strings, but copy whole chars regardless
        let ch = text[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        out.push(ch);
        if !b.is_ascii_whitespace() {
            last = Some(b);
        }
        i += ch.len_utf8().max(1);
    }

    out
}

/// Index just past the closing quote of the string starting at `start`
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut j = start + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'"' => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

fn in_value_position(last: Option<u8>, containers: &[u8]) -> bool {
    match last {
        Some(b':') | Some(b'[') => true,
        Some(b',') => containers.last() == Some(&b'['),
        _ => false,
    }
}

fn is_nan_literal(literal: &str) -> bool {
    literal.len() == 5 && literal.ends_with('"') && literal[1..4].eq_ignore_ascii_case("nan")
}

fn non_finite_token(rest: &[u8]) -> Option<usize> {
    NON_FINITE_TOKENS.iter().find_map(|token| {
        let len = token.len();
        let matches = rest.starts_with(token.as_bytes())
            && rest.get(len).is_none_or(|c| !c.is_ascii_alphanumeric());
        matches.then_some(len)
    })
}
