//! Precomputed regression results
//!
//! The regression fit happens upstream; these structures only carry the
//! coefficients, model summary and diagnostics it produced. Every numeric
//! field is optional because the provider sanitizes non-finite values to
//! `null`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Variable name of the intercept term
pub const INTERCEPT_VARIABLE: &str = "const";
/// Key used for results that do not depend on a temperature
pub const NONE_KEY: &str = "none";

/// Mapping from result key to result, in document order.
///
/// A `None` value is an entry the provider listed as `null`.
pub type ResultMap = IndexMap<String, Option<RegressionResult>>;

/// All regression results of a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionResults {
    /// Predictor-only result
    #[serde(default)]
    pub none: Option<RegressionResult>,
    /// Results keyed by temperature field (or `"none"`)
    #[serde(default)]
    pub simple_regressions: ResultMap,
    /// Results keyed by `"{temperature}_{predictor}"` (or `"none"`)
    #[serde(default)]
    pub multiple_regressions: ResultMap,
}

impl RegressionResults {
    /// Check if at least one multiple-regression result is present
    pub fn has_multiple(&self) -> bool {
        self.multiple_regressions.values().any(Option::is_some)
    }

    /// Look up a simple-regression result by raw key
    pub fn simple(&self, key: &str) -> Option<&RegressionResult> {
        self.simple_regressions.get(key).and_then(Option::as_ref)
    }

    /// Look up a multiple-regression result by raw key
    pub fn multiple(&self, key: &str) -> Option<&RegressionResult> {
        self.multiple_regressions.get(key).and_then(Option::as_ref)
    }
}

/// A single regression result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Terms; the first is always the intercept
    #[serde(default)]
    pub coefficients: Vec<Coefficient>,
    /// Goodness-of-fit summary
    #[serde(default)]
    pub model_summary: ModelSummary,
    /// Numerical diagnostics
    #[serde(default)]
    pub diagnostics: Diagnostics,
}

impl RegressionResult {
    /// Create a result from its coefficients
    pub fn new(coefficients: Vec<Coefficient>) -> Self {
        Self {
            coefficients,
            ..Self::default()
        }
    }

    /// Set the model summary
    pub fn with_summary(mut self, summary: ModelSummary) -> Self {
        self.model_summary = summary;
        self
    }

    /// Set the condition number
    pub fn with_condition_number(mut self, condition_number: f64) -> Self {
        self.diagnostics.condition_number = Some(condition_number);
        self
    }

    /// Get the i-th term
    pub fn term(&self, index: usize) -> Option<&Coefficient> {
        self.coefficients.get(index)
    }

    /// Intercept estimate, if finite
    pub fn intercept(&self) -> Option<f64> {
        self.term(0).and_then(Coefficient::estimate)
    }

    /// Estimate of the i-th term, if finite
    pub fn estimate(&self, index: usize) -> Option<f64> {
        self.term(index).and_then(Coefficient::estimate)
    }

    /// Number of terms including the intercept
    pub fn n_terms(&self) -> usize {
        self.coefficients.len()
    }
}

/// Coefficient estimate with its p-value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Variable name (`"const"` for the intercept)
    #[serde(default)]
    pub variable: String,
    /// Coefficient estimate
    #[serde(default)]
    pub coef: Option<f64>,
    /// p-value
    #[serde(default)]
    pub p_value: Option<f64>,
}

impl Coefficient {
    /// Create a new coefficient
    pub fn new(variable: impl Into<String>, coef: f64) -> Self {
        Self {
            variable: variable.into(),
            coef: Some(coef),
            p_value: None,
        }
    }

    /// Create the intercept term
    pub fn intercept(coef: f64) -> Self {
        Self::new(INTERCEPT_VARIABLE, coef)
    }

    /// Set p-value
    pub fn with_p_value(mut self, p: f64) -> Self {
        self.p_value = Some(p);
        self
    }

    /// Is this the intercept?
    pub fn is_intercept(&self) -> bool {
        self.variable == INTERCEPT_VARIABLE
    }

    /// Estimate, if present and finite
    pub fn estimate(&self) -> Option<f64> {
        self.coef.filter(|v| v.is_finite())
    }

    /// p-value, if present and finite
    pub fn p_value(&self) -> Option<f64> {
        self.p_value.filter(|v| v.is_finite())
    }
}

/// Model summary statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// R-squared
    #[serde(default)]
    pub r_squared: Option<f64>,
    /// Adjusted R-squared
    #[serde(default)]
    pub adj_r_squared: Option<f64>,
    /// F-statistic
    #[serde(default)]
    pub f_statistic: Option<f64>,
    /// p-value of the F-statistic, usually preformatted upstream
    #[serde(default)]
    pub prob_f_statistic: Option<ProbValue>,
    /// Number of observations used in the fit
    #[serde(default)]
    pub observations: Option<f64>,
}

/// Numerical diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Condition number of the design matrix
    #[serde(default)]
    pub condition_number: Option<f64>,
}

/// A probability that may arrive preformatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbValue {
    Number(f64),
    Text(String),
}
