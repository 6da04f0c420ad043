//! Observation points for the active variant
//!
//! Rows are kept only when every field the variant needs holds a finite
//! number. Nothing is substituted for a missing value.

use serde::Serialize;
use std::cmp::Ordering;

use crate::stats::to_fixed;
use crate::variant::{AxisTitles, RegressionMode, VariantState};
use dd_core::data::{Observation, PREDICTOR_FIELD, Period, USAGE_FIELD};


/// A plotted observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Degree days, or the predictor in predictor-only mode
    pub x: f64,
    /// Usage
    pub y: f64,
    /// Predictor, multiple mode only
    pub z: Option<f64>,
    /// Billing period of the row
    pub period: Period,
}

impl ChartPoint {
    /// Tooltip lines for this point
    pub fn tooltip(&self, titles: &AxisTitles) -> Vec<String> {
        let mut lines = vec![
            format!("{}: {}", titles.x, to_fixed(self.x, 2)),
            format!("{}: {}", titles.y, to_fixed(self.y, 2)),
        ];
        if let (Some(z), Some(title)) = (self.z, titles.z.as_ref()) {
            lines.push(format!("{}: {}", title, to_fixed(z, 2)));
        }
        if !self.period.is_empty() {
            lines.push(format!("Period: {}", self.period));
        }
        lines
    }
}

/// Extract the points of the active variant, in input order.
///
/// Outside predictor-only mode nothing is extracted until a temperature is
/// selected.
pub fn extract(observations: &[Observation], state: &VariantState) -> Vec<ChartPoint> {
    let mode = state.mode();
    let temperature = match (mode, state.selected_temperature()) {
        (RegressionMode::PredictorOnly, _) => None,
        (_, Some(key)) => Some(key),
        (_, None) => {
            tracing::debug!(%mode, "no temperature selected, nothing to extract");
            return Vec::new();
        }
    };

    let points: Vec<ChartPoint> = observations
        .iter()
        .filter_map(|row| point_for(row, mode, temperature))
        .collect();

    let dropped = observations.len() - points.len();
    if dropped > 0 {
        tracing::debug!(
            %mode,
            kept = points.len(),
            dropped,
            "dropped observations with missing or non-finite fields"
        );
    }

    points
}

fn point_for(row: &Observation, mode: RegressionMode, temperature: Option<&str>) -> Option<ChartPoint> {
    let y = row.finite(USAGE_FIELD)?;

    let (x, z) = match mode {
        RegressionMode::PredictorOnly => (row.finite(PREDICTOR_FIELD)?, None),
        RegressionMode::Simple => (row.finite(temperature?)?, None),
        RegressionMode::Multiple => {
            let x = row.finite(temperature?)?;
            (x, Some(row.finite(PREDICTOR_FIELD)?))
        }
    };

    Some(ChartPoint {
        x,
        y,
        z,
        period: row.period(),
    })
}

/// Sort points by ascending `x`. Ties keep their input order.
pub fn sort_by_x(points: &mut [ChartPoint]) {
    points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
}

/// `x` values of the points
pub fn x_values(points: &[ChartPoint]) -> Vec<f64> {
    points.iter().map(|p| p.x).collect()
}

/// `(x, z)` of the points that carry a predictor value, split into the
/// degree-day and predictor axes
pub fn predictor_pairs(points: &[ChartPoint]) -> (Vec<f64>, Vec<f64>) {
    points.iter().filter_map(|p| p.z.map(|z| (p.x, z))).unzip()
}
