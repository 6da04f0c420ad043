//! Dataset snapshot
//!
//! A `Dataset` is fetched once per load and replaced wholesale on reload.
//! Nothing in the chart engine mutates it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FieldValue, Observation, RegressionResults};

/// Value of `parameters.kind` for datasets without a weather component
pub const KIND_NONE: &str = "none";

/// Immutable dataset snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Model parameters
    #[serde(default)]
    pub parameters: Parameters,
    /// Observation rows, in provider order
    #[serde(default)]
    pub observations: Vec<Observation>,
    /// Precomputed regression results
    #[serde(default)]
    pub regression_results: RegressionResults,
}

impl Dataset {
    /// Create a dataset from its parts
    pub fn new(
        parameters: Parameters,
        observations: Vec<Observation>,
        regression_results: RegressionResults,
    ) -> Self {
        Self {
            parameters,
            observations,
            regression_results,
        }
    }

    /// First observation row, used to discover the available fields
    pub fn first_observation(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Number of observation rows
    pub fn n_obs(&self) -> usize {
        self.observations.len()
    }
}

/// Model parameters attached to a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Weather kind; `"none"` when no degree days were requested
    #[serde(default)]
    pub kind: Option<String>,
    /// Auxiliary predictors (zero or one in practice)
    #[serde(default)]
    pub predictors: Vec<Predictor>,
    /// Site latitude
    #[serde(default)]
    pub lat: Option<FieldValue>,
    /// Site longitude
    #[serde(default)]
    pub lon: Option<FieldValue>,
    /// Unit system name (`"imperial"` or `"metric"`)
    #[serde(default)]
    pub unit: Option<String>,
    /// Any other provider fields, kept for the interpretation payload
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Parameters {
    /// Check if `kind` is `"none"`
    pub fn kind_is_none(&self) -> bool {
        self.kind.as_deref() == Some(KIND_NONE)
    }

    /// Check if the dataset is a predictor-only regression
    pub fn is_predictor_only(&self) -> bool {
        self.kind_is_none() && self.predictors.len() == 1
    }

    /// Name of the first predictor, if any
    pub fn predictor_name(&self) -> Option<&str> {
        self.predictors
            .first()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Unit system for temperature labels
    pub fn unit(&self) -> Unit {
        self.unit.as_deref().map(Unit::from_name).unwrap_or_default()
    }
}

/// Auxiliary predictor description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predictor {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Predictor {
    /// Create a predictor with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: IndexMap::new(),
        }
    }
}

/// Unit system used for base temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Celsius; also used when the unit is unset or unknown
    #[default]
    Metric,
    /// Fahrenheit
    Imperial,
}

impl Unit {
    /// Resolve a unit name. Anything but `"imperial"` is metric.
    pub fn from_name(name: &str) -> Self {
        if name == "imperial" {
            Unit::Imperial
        } else {
            Unit::Metric
        }
    }

    /// Temperature symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Metric => write!(f, "metric"),
            Unit::Imperial => write!(f, "imperial"),
        }
    }
}
