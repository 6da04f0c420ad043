//! Interpretation service payload
//!
//! The interpretation service receives the model parameters and the
//! multiple-regression results. Datasets without a weather component send
//! only their `"none"` entry.

use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::variant::VariantState;
use dd_core::data::{Dataset, NONE_KEY, Parameters, ResultMap};

/// Request body for the interpretation service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretationPayload<'a> {
    pub parameters: &'a Parameters,
    pub regression_results: PayloadResults,
}

/// Regression results included in the payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadResults {
    pub multiple_regressions: ResultMap,
}

impl InterpretationPayload<'_> {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Shape the interpretation payload for a snapshot.
///
/// Fails with [`ChartError::NoResults`] when the selected results hold no
/// usable entry.
pub fn interpretation_payload<'a>(
    dataset: &'a Dataset,
    state: &VariantState,
) -> Result<InterpretationPayload<'a>> {
    let all = &dataset.regression_results.multiple_regressions;

    let multiple_regressions: ResultMap =
        if state.is_predictor_only() || dataset.parameters.kind_is_none() {
            all.iter()
                .filter(|(key, _)| key.as_str() == NONE_KEY)
                .map(|(key, result)| (key.clone(), result.clone()))
                .collect()
        } else {
            all.clone()
        };

    if multiple_regressions.values().all(Option::is_none) {
        return Err(ChartError::NoResults);
    }

    Ok(InterpretationPayload {
        parameters: &dataset.parameters,
        regression_results: PayloadResults {
            multiple_regressions,
        },
    })
}
