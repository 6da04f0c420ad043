//! Chart configuration
//!
//! Presentation choices that the data does not decide: how far regression
//! lines extend, which axis the multiple-regression projection is drawn
//! against, and the plane grid resolution.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::variant::RegressionMode;
use dd_core::data::Dataset;

/// Default number of plane grid samples per axis
pub const DEFAULT_GRID_SAMPLES: usize = 20;

/// Chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Line extent in simple-regression mode
    pub simple_line_domain: LineDomain,
    /// Line extent in predictor-only mode
    pub predictor_line_domain: LineDomain,
    /// Axis the multiple-regression projection is drawn against
    pub projection_axis: ProjectionAxis,
    /// Plane grid samples per axis
    pub grid_samples: usize,
    /// Predictor label when the dataset names none
    pub predictor_fallback: String,
    /// Name of the dependent variable
    pub response_label: String,
}

/// Extent of a drawn regression line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDomain {
    /// `[min(x), max(x)]` of the plotted points
    #[default]
    ObservedRange,
    /// `[0, 1.2 * max(x)]`
    OriginAnchored,
}

/// Regressor the projected multiple-regression line runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionAxis {
    /// Draw against degree days, predictor held at its mean
    #[default]
    DegreeDays,
    /// Draw against the predictor, degree days held at their mean
    Predictor,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            simple_line_domain: LineDomain::ObservedRange,
            predictor_line_domain: LineDomain::ObservedRange,
            projection_axis: ProjectionAxis::DegreeDays,
            grid_samples: DEFAULT_GRID_SAMPLES,
            predictor_fallback: "Predictor 1".to_string(),
            response_label: "Usage".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a configuration document. Missing fields take
    /// their default values.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: ChartConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.grid_samples < 2 {
            return Err(ChartError::InvalidConfig {
                message: format!(
                    "grid_samples must be at least 2, got {}",
                    self.grid_samples
                ),
            });
        }

        if self.response_label.trim().is_empty() {
            return Err(ChartError::InvalidConfig {
                message: "response_label must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Line extent used for a mode
    pub fn line_domain(&self, mode: RegressionMode) -> LineDomain {
        match mode {
            RegressionMode::PredictorOnly => self.predictor_line_domain,
            RegressionMode::Simple | RegressionMode::Multiple => self.simple_line_domain,
        }
    }

    /// Predictor name of a dataset, or the configured fallback
    pub fn predictor_name<'a>(&'a self, dataset: &'a Dataset) -> &'a str {
        dataset
            .parameters
            .predictor_name()
            .unwrap_or(&self.predictor_fallback)
    }
}
