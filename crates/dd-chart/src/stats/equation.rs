//! Regression equations

use super::format::{Metric, NOT_AVAILABLE, fixed, format_metric, to_fixed};
use crate::variant::{RegressionFamily, RegressionMode, VariantState};
use dd_core::data::{PREDICTOR_FIELD, RegressionResult, Unit};
use dd_core::fields::format_degree_day;

/// Names printed after each slope of an equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationLabels {
    /// Label of the first slope
    pub first: String,
    /// Label of the second slope; when set the equation needs three terms
    pub second: Option<String>,
}

impl EquationLabels {
    /// Labels of a single-regressor equation
    pub fn simple(first: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: None,
        }
    }

    /// Labels of a two-regressor equation
    pub fn multiple(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: Some(second.into()),
        }
    }

    /// Labels of the active variant
    pub fn for_variant(state: &VariantState, predictor: &str, unit: Unit) -> Self {
        let temperature = state
            .selected_temperature()
            .map(|key| format_degree_day(key, unit))
            .unwrap_or_default();

        match state.mode() {
            RegressionMode::PredictorOnly => Self::simple(predictor),
            RegressionMode::Simple => Self::simple(temperature),
            RegressionMode::Multiple => Self::multiple(temperature, predictor),
        }
    }

    /// Labels taken from a result's own term names
    pub fn for_result(
        result: &RegressionResult,
        family: RegressionFamily,
        predictor: &str,
        unit: Unit,
    ) -> Self {
        let term_label = |index: usize, fallback: &str| match result.term(index) {
            Some(term) if term.variable == PREDICTOR_FIELD => predictor.to_string(),
            Some(term) if !term.variable.is_empty() => format_degree_day(&term.variable, unit),
            _ => fallback.to_string(),
        };

        match family {
            RegressionFamily::Simple => Self::simple(term_label(1, "Degree Days")),
            RegressionFamily::Multiple => {
                Self::multiple(term_label(1, "Degree Days"), term_label(2, predictor))
            }
        }
    }

    fn required_terms(&self) -> usize {
        if self.second.is_some() { 3 } else { 2 }
    }
}

/// A slope with an explicit sign: `+5.00`, `-5.00`
pub fn format_signed(value: f64) -> String {
    let text = to_fixed(value, 2);
    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}

/// Format `"{b0} {±b1} × {first} [{±b2} × {second}]"`.
///
/// `"N/A"` when the result is missing, has too few terms for the labels, or
/// any needed estimate is absent.
pub fn format_equation(result: Option<&RegressionResult>, labels: &EquationLabels) -> String {
    let Some(result) = result else {
        return NOT_AVAILABLE.to_string();
    };
    if result.n_terms() < labels.required_terms() {
        return NOT_AVAILABLE.to_string();
    }

    let (Some(intercept), Some(first)) = (result.intercept(), result.estimate(1)) else {
        return NOT_AVAILABLE.to_string();
    };

    let mut equation = format!(
        "{} {} × {}",
        fixed(Some(intercept), 2),
        format_signed(first),
        labels.first
    );

    if let Some(second_label) = &labels.second {
        let Some(second) = result.estimate(2) else {
            return NOT_AVAILABLE.to_string();
        };
        equation.push_str(&format!(" {} × {}", format_signed(second), second_label));
    }

    equation
}

/// Equation line shown above a chart: `"{response} = {equation} (R² = {r2})"`
pub fn chart_equation(
    result: Option<&RegressionResult>,
    labels: &EquationLabels,
    response: &str,
) -> String {
    format!(
        "{} = {} (R² = {})",
        response,
        format_equation(result, labels),
        format_metric(result, Metric::RSquared)
    )
}
