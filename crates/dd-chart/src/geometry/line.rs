//! Regression lines

use serde::Serialize;
use std::cmp::Ordering;

use super::{Extent, mean};
use crate::config::{LineDomain, ProjectionAxis};
use crate::points::{ChartPoint, predictor_pairs, x_values};
use crate::stats::to_fixed;
use dd_core::data::RegressionResult;

/// A vertex of a 2D line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Intercept and up to two slopes, ready for evaluation.
///
/// An absent or non-finite coefficient evaluates as 0. This only affects
/// drawn geometry; formatted statistics show such values as `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CoefficientVector {
    /// Intercept
    pub intercept: f64,
    /// Degree-day slope, or the predictor slope in predictor-only fits
    pub first: f64,
    /// Predictor slope of a multiple fit
    pub second: f64,
}

impl CoefficientVector {
    /// Create a coefficient vector
    pub fn new(intercept: f64, first: f64, second: f64) -> Self {
        Self {
            intercept,
            first,
            second,
        }
    }

    /// Read the coefficients of a result
    pub fn from_result(result: &RegressionResult) -> Self {
        Self {
            intercept: result.intercept().unwrap_or(0.0),
            first: result.estimate(1).unwrap_or(0.0),
            second: result.estimate(2).unwrap_or(0.0),
        }
    }

    /// `intercept + first * a`
    pub fn evaluate_simple(&self, a: f64) -> f64 {
        self.intercept + self.first * a
    }

    /// `intercept + first * a + second * b`
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        self.intercept + self.first * a + self.second * b
    }
}

/// Two-point line from `x_lo` to `x_hi`
pub fn line_segment(intercept: f64, slope: f64, x_lo: f64, x_hi: f64) -> [LinePoint; 2] {
    [
        LinePoint {
            x: x_lo,
            y: intercept + slope * x_lo,
        },
        LinePoint {
            x: x_hi,
            y: intercept + slope * x_hi,
        },
    ]
}

/// Endpoints of a line over the given x values, `None` when there are none
pub fn resolve_domain(domain: LineDomain, xs: &[f64]) -> Option<(f64, f64)> {
    let extent = Extent::of(xs)?;
    match domain {
        LineDomain::ObservedRange => Some((extent.min, extent.max)),
        LineDomain::OriginAnchored => Some((0.0, extent.max * 1.2)),
    }
}

/// Simple-regression line through the plotted points. Empty when there are
/// no points.
pub fn regression_line(
    result: &RegressionResult,
    points: &[ChartPoint],
    domain: LineDomain,
) -> Vec<LinePoint> {
    let Some((lo, hi)) = resolve_domain(domain, &x_values(points)) else {
        return Vec::new();
    };

    let coefficients = CoefficientVector::from_result(result);
    line_segment(coefficients.intercept, coefficients.first, lo, hi).to_vec()
}

/// 2D projection of a multiple-regression plane.
///
/// The other regressor is held at its sample mean, so this is an
/// approximation for orientation only and not a fitted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedLine {
    /// Regressor along the horizontal axis
    pub axis: ProjectionAxis,
    /// Mean value the other regressor is held at
    pub held_at: f64,
    /// One vertex per point, ascending along `axis`
    pub points: Vec<LinePoint>,
}

impl ProjectedLine {
    /// Legend text that marks the line as approximate
    pub fn label(&self, held_name: &str) -> String {
        format!(
            "Approximation: {} held at its mean ({})",
            held_name,
            to_fixed(self.held_at, 2)
        )
    }
}

/// Project a multiple regression onto one axis, evaluated at every point.
///
/// Only points carrying a predictor value take part. `None` when there are
/// no such points.
pub fn projected_line(
    coefficients: &CoefficientVector,
    points: &[ChartPoint],
    axis: ProjectionAxis,
) -> Option<ProjectedLine> {
    let (degree_days, predictor) = predictor_pairs(points);
    let (mut along, held) = match axis {
        ProjectionAxis::DegreeDays => (degree_days, predictor),
        ProjectionAxis::Predictor => (predictor, degree_days),
    };
    let held_at = mean(&held)?;

    along.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let points = along
        .into_iter()
        .map(|v| {
            let y = match axis {
                ProjectionAxis::DegreeDays => coefficients.evaluate(v, held_at),
                ProjectionAxis::Predictor => coefficients.evaluate(held_at, v),
            };
            LinePoint { x: v, y }
        })
        .collect();

    Some(ProjectedLine {
        axis,
        held_at,
        points,
    })
}
