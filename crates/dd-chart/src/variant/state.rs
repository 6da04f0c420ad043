//! Variant state machine

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResultKey;
use dd_core::data::{Dataset, Unit};
use dd_core::fields::{degree_day_keys, format_degree_day};

/// Which regression drives the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegressionMode {
    /// Usage against the single predictor, no weather component
    PredictorOnly,
    /// Usage against one degree-day field
    Simple,
    /// Usage against one degree-day field and the predictor
    Multiple,
}

/// Family of precomputed results a mode reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionFamily {
    /// `simple_regressions`
    Simple,
    /// `multiple_regressions`
    Multiple,
}

impl RegressionMode {
    /// Result family; predictor-only fits are single-regressor fits
    pub fn family(&self) -> RegressionFamily {
        match self {
            RegressionMode::Multiple => RegressionFamily::Multiple,
            RegressionMode::PredictorOnly | RegressionMode::Simple => RegressionFamily::Simple,
        }
    }
}

impl fmt::Display for RegressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionMode::PredictorOnly => write!(f, "predictor-only"),
            RegressionMode::Simple => write!(f, "simple"),
            RegressionMode::Multiple => write!(f, "multiple"),
        }
    }
}

impl fmt::Display for RegressionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionFamily::Simple => write!(f, "Simple"),
            RegressionFamily::Multiple => write!(f, "Multiple"),
        }
    }
}

/// Current variant selection
///
/// Transitions consume the state and return the next one, so a caller can
/// compare old and new values to decide what to recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantState {
    mode: RegressionMode,
    selected_temperature: Option<String>,
}

impl VariantState {
    /// Create a state directly
    pub fn new(mode: RegressionMode, selected_temperature: Option<String>) -> Self {
        Self {
            mode,
            selected_temperature,
        }
    }

    /// Initial state for a freshly loaded dataset.
    ///
    /// Predictor-only when `kind` is `"none"` with exactly one predictor,
    /// whatever degree-day fields the observations carry. Otherwise multiple
    /// if any multiple-regression result exists, else simple. The temperature
    /// defaults to the first degree-day field of the first observation in
    /// string order.
    pub fn initialize(dataset: &Dataset) -> Self {
        if dataset.parameters.is_predictor_only() {
            return Self::new(RegressionMode::PredictorOnly, None);
        }

        let mode = if dataset.regression_results.has_multiple() {
            RegressionMode::Multiple
        } else {
            RegressionMode::Simple
        };

        let selected_temperature = dataset
            .first_observation()
            .and_then(|row| degree_day_keys(row).into_iter().next());

        Self::new(mode, selected_temperature)
    }

    /// Active mode
    pub fn mode(&self) -> RegressionMode {
        self.mode
    }

    /// Selected degree-day field, if any
    pub fn selected_temperature(&self) -> Option<&str> {
        self.selected_temperature.as_deref()
    }

    /// Check if the state is in predictor-only mode
    pub fn is_predictor_only(&self) -> bool {
        self.mode == RegressionMode::PredictorOnly
    }

    /// Result family of the active mode
    pub fn family(&self) -> RegressionFamily {
        self.mode.family()
    }

    /// Select a temperature field. Ignored in predictor-only mode.
    ///
    /// The key is not checked against the dataset; an unknown key simply
    /// yields no points and no result downstream.
    pub fn select_temperature(self, key: impl Into<String>) -> Self {
        if self.is_predictor_only() {
            return self;
        }
        Self {
            selected_temperature: Some(key.into()),
            ..self
        }
    }

    /// Flip between simple and multiple. Ignored in predictor-only mode.
    pub fn toggle_simple_multiple(self) -> Self {
        let mode = match self.mode {
            RegressionMode::PredictorOnly => return self,
            RegressionMode::Simple => RegressionMode::Multiple,
            RegressionMode::Multiple => RegressionMode::Simple,
        };
        Self { mode, ..self }
    }

    /// Key of the active regression result, or `None` when no temperature
    /// is selected outside predictor-only mode
    pub fn result_key(&self, predictor: &str) -> Option<ResultKey> {
        match self.mode {
            RegressionMode::PredictorOnly => Some(ResultKey::PredictorOnly),
            RegressionMode::Simple => self.selected_temperature.clone().map(ResultKey::simple),
            RegressionMode::Multiple => self
                .selected_temperature
                .clone()
                .map(|temperature| ResultKey::multiple(temperature, predictor)),
        }
    }

    /// Chart heading for the active variant
    pub fn label(&self, predictor: &str) -> String {
        match self.mode {
            RegressionMode::PredictorOnly => format!("{} Regression", predictor),
            RegressionMode::Simple => "Simple Regression".to_string(),
            RegressionMode::Multiple => "Multiple Regression".to_string(),
        }
    }

    /// Axis titles for the active variant
    pub fn axis_titles(&self, predictor: &str, unit: Unit, response: &str) -> AxisTitles {
        let temperature = self
            .selected_temperature
            .as_deref()
            .map(|key| format_degree_day(key, unit))
            .unwrap_or_default();

        match self.mode {
            RegressionMode::PredictorOnly => AxisTitles {
                x: predictor.to_string(),
                y: response.to_string(),
                z: None,
            },
            RegressionMode::Simple => AxisTitles {
                x: temperature,
                y: response.to_string(),
                z: None,
            },
            RegressionMode::Multiple => AxisTitles {
                x: temperature,
                y: response.to_string(),
                z: Some(predictor.to_string()),
            },
        }
    }
}

/// Axis titles of a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTitles {
    /// Horizontal axis
    pub x: String,
    /// Response axis
    pub y: String,
    /// Predictor axis of the 3D view
    pub z: Option<String>,
}

/// A temperature selector button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemperatureOption {
    /// Degree-day field name
    pub key: String,
    /// Display label, e.g. `HDD (60°F)`
    pub label: String,
    /// Whether this is the selected field
    pub selected: bool,
}

/// Temperature selector options, in string order. Empty in predictor-only
/// mode.
pub fn temperature_options(dataset: &Dataset, state: &VariantState) -> Vec<TemperatureOption> {
    if state.is_predictor_only() {
        return Vec::new();
    }

    let Some(first) = dataset.first_observation() else {
        return Vec::new();
    };

    let unit = dataset.parameters.unit();
    degree_day_keys(first)
        .into_iter()
        .map(|key| TemperatureOption {
            label: format_degree_day(&key, unit),
            selected: state.selected_temperature() == Some(key.as_str()),
            key,
        })
        .collect()
}
