//! Dataset snapshot structures for DegreeLens
//!
//! This module provides the read-only view of a dataset as delivered by the
//! provider: parameters, observation rows and precomputed regression results.

mod dataset;
mod loader;
mod observation;
mod results;
mod value;


// Re-exports
pub use dataset::{Dataset, KIND_NONE, Parameters, Predictor, Unit};
pub use loader::sanitize_json;
pub use observation::{
    BEGIN_PERIOD_FIELD, END_PERIOD_FIELD, Observation, PREDICTOR_FIELD, Period, USAGE_FIELD,
};
pub use results::{
    Coefficient, Diagnostics, INTERCEPT_VARIABLE, ModelSummary, NONE_KEY, ProbValue,
    RegressionResult, RegressionResults, ResultMap,
};
pub use value::FieldValue;

/// Error types specific to dataset loading
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset payload has no '{0}' section")]
    MissingSection(&'static str),

    #[error("Dataset payload is empty")]
    Empty,
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
