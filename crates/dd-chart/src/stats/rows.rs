//! Statistics table row specifications

use super::equation::{EquationLabels, format_equation};
use super::format::{Metric, format_metric};
use crate::variant::RegressionFamily;
use dd_core::data::{RegressionResult, Unit};

/// What a row shows for each result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowValue {
    /// The fitted equation
    Equation,
    /// A single metric
    Metric(Metric),
}

/// Context shared by every cell of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContext {
    /// Result family the columns belong to
    pub family: RegressionFamily,
    /// Predictor display name
    pub predictor: String,
    /// Unit for degree-day labels
    pub unit: Unit,
}

impl CellContext {
    /// Create a cell context
    pub fn new(family: RegressionFamily, predictor: impl Into<String>, unit: Unit) -> Self {
        Self {
            family,
            predictor: predictor.into(),
            unit,
        }
    }
}

/// A table row: heading, help text and value accessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpec {
    pub title: String,
    pub description: String,
    /// What to look for in the value
    pub guidance: String,
    pub value: RowValue,
}

impl RowSpec {
    /// Create a row spec
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        guidance: impl Into<String>,
        value: RowValue,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            guidance: guidance.into(),
            value,
        }
    }

    /// Cell text for one result; never empty
    pub fn cell(&self, result: Option<&RegressionResult>, context: &CellContext) -> String {
        match self.value {
            RowValue::Equation => {
                let labels = match result {
                    Some(r) => {
                        EquationLabels::for_result(r, context.family, &context.predictor, context.unit)
                    }
                    None => EquationLabels::simple(""),
                };
                format_equation(result, &labels)
            }
            RowValue::Metric(metric) => format_metric(result, metric),
        }
    }
}

/// Standard rows of the statistics table for a result family
pub fn standard_rows(family: RegressionFamily, predictor: &str) -> Vec<RowSpec> {
    let significance = "Values below 0.05 indicate statistical significance.";

    let mut rows = vec![
        RowSpec::new(
            "Equation",
            "The formula that predicts energy usage from degree days and the predictor.",
            "Check that coefficients have the expected signs and reasonable magnitudes.",
            RowValue::Equation,
        ),
        RowSpec::new(
            "R²",
            "The proportion of variance in usage explained by the model.",
            "Higher values indicate a better fit (range: 0 to 1).",
            RowValue::Metric(Metric::RSquared),
        ),
        RowSpec::new(
            "Adjusted R²",
            "R² adjusted for the number of regressors in the model.",
            "Prefer this over R² when comparing models with different numbers of regressors.",
            RowValue::Metric(Metric::AdjRSquared),
        ),
    ];

    match family {
        RegressionFamily::Simple => rows.push(RowSpec::new(
            "p-value",
            "Statistical significance of the coefficient.",
            significance,
            RowValue::Metric(Metric::PValue(1)),
        )),
        RegressionFamily::Multiple => {
            rows.push(RowSpec::new(
                "p-value (Degree Days)",
                "Statistical significance of the degree days coefficient.",
                significance,
                RowValue::Metric(Metric::PValue(1)),
            ));
            rows.push(RowSpec::new(
                format!("p-value ({})", predictor),
                format!("Statistical significance of the {} coefficient.", predictor),
                significance,
                RowValue::Metric(Metric::PValue(2)),
            ));
        }
    }

    rows.extend([
        RowSpec::new(
            "F-statistic",
            "Tests the overall significance of the regression model.",
            "Higher values indicate a stronger relationship between the regressors and usage.",
            RowValue::Metric(Metric::FStatistic),
        ),
        RowSpec::new(
            "p-value (F-statistic)",
            "Tests whether the regression model as a whole is statistically significant.",
            "Lower is better; below 0.05 means the model is significant.",
            RowValue::Metric(Metric::ProbFStatistic),
        ),
        RowSpec::new(
            "Condition Number",
            "Measures the numerical stability of the model.",
            "Lower values indicate better stability. Values above 30 suggest multicollinearity.",
            RowValue::Metric(Metric::ConditionNumber),
        ),
        RowSpec::new(
            "Observations",
            "Number of data points used in the analysis.",
            "More observations generally lead to more reliable results.",
            RowValue::Metric(Metric::Observations),
        ),
    ]);

    rows
}
