//! Null-safe metric formatting

use dd_core::data::{ProbValue, RegressionResult};

/// Placeholder for any value that is absent or not finite
pub const NOT_AVAILABLE: &str = "N/A";

/// p-values below this magnitude switch to scientific notation
const SCIENTIFIC_THRESHOLD: f64 = 1e-6;

/// A displayable field of a regression result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    RSquared,
    AdjRSquared,
    FStatistic,
    ProbFStatistic,
    Observations,
    ConditionNumber,
    /// Estimate of the i-th term
    Coefficient(usize),
    /// p-value of the i-th term
    PValue(usize),
}

impl Metric {
    /// Resolve a dotted field path such as `model_summary.r_squared` or
    /// `coefficients.1.p_value`
    pub fn from_path(path: &str) -> Option<Self> {
        let metric = match path {
            "model_summary.r_squared" => Metric::RSquared,
            "model_summary.adj_r_squared" => Metric::AdjRSquared,
            "model_summary.f_statistic" => Metric::FStatistic,
            "model_summary.prob_f_statistic" => Metric::ProbFStatistic,
            "model_summary.observations" => Metric::Observations,
            "diagnostics.condition_number" => Metric::ConditionNumber,
            _ => {
                let rest = path.strip_prefix("coefficients.")?;
                let (index, field) = rest.split_once('.')?;
                let index = index.parse().ok()?;
                match field {
                    "coef" => Metric::Coefficient(index),
                    "p_value" => Metric::PValue(index),
                    _ => return None,
                }
            }
        };
        Some(metric)
    }

    /// Dotted field path of the metric
    pub fn path(&self) -> String {
        match self {
            Metric::RSquared => "model_summary.r_squared".to_string(),
            Metric::AdjRSquared => "model_summary.adj_r_squared".to_string(),
            Metric::FStatistic => "model_summary.f_statistic".to_string(),
            Metric::ProbFStatistic => "model_summary.prob_f_statistic".to_string(),
            Metric::Observations => "model_summary.observations".to_string(),
            Metric::ConditionNumber => "diagnostics.condition_number".to_string(),
            Metric::Coefficient(i) => format!("coefficients.{}.coef", i),
            Metric::PValue(i) => format!("coefficients.{}.p_value", i),
        }
    }
}

/// Format a metric of a result, `"N/A"` when the result or value is missing
pub fn format_metric(result: Option<&RegressionResult>, metric: Metric) -> String {
    let Some(result) = result else {
        return NOT_AVAILABLE.to_string();
    };

    let summary = &result.model_summary;
    match metric {
        Metric::RSquared => fixed(summary.r_squared, 3),
        Metric::AdjRSquared => fixed(summary.adj_r_squared, 3),
        Metric::FStatistic => fixed(summary.f_statistic, 2),
        Metric::ProbFStatistic => format_prob(summary.prob_f_statistic.as_ref()),
        Metric::Observations => fixed(summary.observations, 0),
        Metric::ConditionNumber => fixed(result.diagnostics.condition_number, 2),
        Metric::Coefficient(i) => fixed(result.estimate(i), 2),
        Metric::PValue(i) => format_p_value(result.term(i).and_then(|c| c.p_value())),
    }
}

/// Format a metric by dotted path. Unknown paths render as `"N/A"`.
pub fn format_metric_path(result: Option<&RegressionResult>, path: &str) -> String {
    match Metric::from_path(path) {
        Some(metric) => format_metric(result, metric),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a p-value: 6 decimals, or scientific notation when it would round
/// to zero
pub fn format_p_value(p: Option<f64>) -> String {
    match p.filter(|v| v.is_finite()) {
        Some(p) if p != 0.0 && p.abs() < SCIENTIFIC_THRESHOLD => format!("{:.2e}", p),
        p => fixed(p, 6),
    }
}

/// Format the F-statistic probability.
///
/// Text arrives preformatted and passes through unchanged, except `"nan"`
/// and empty text which become `"N/A"`.
pub fn format_prob(value: Option<&ProbValue>) -> String {
    match value {
        Some(ProbValue::Number(p)) => format_p_value(Some(*p)),
        Some(ProbValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
                NOT_AVAILABLE.to_string()
            } else {
                text.clone()
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Fixed-point formatting of a finite value
pub(crate) fn fixed(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => to_fixed(v, decimals),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format with `decimals` fractional digits, rounding exact ties away from
/// zero (`0.125` gives `"0.13"`). Negative zero prints as `0`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    // Adding 0.0 turns -0.0 into 0.0
    let value = value + 0.0;
    let value = if is_exact_tie(value, decimals) {
        // Next float away from zero, just past the tie
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{:.*}", decimals, value)
}

/// Check if `value * 10^decimals` lies exactly halfway between two integers.
///
/// With `value = m * 2^e` this holds when `2 * m * 5^d * 2^(e + d)` is odd,
/// i.e. when `m` has exactly `-(e + d + 1)` trailing zero bits.
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    let Ok(decimals) = i64::try_from(decimals) else {
        return false;
    };
    i64::from(mantissa.trailing_zeros()) == -(exponent + decimals + 1)
}
