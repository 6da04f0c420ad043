//! Regression plane grid

use ndarray::{Array1, Array2};
use serde::Serialize;

use super::{CoefficientVector, Extent};
use crate::points::{ChartPoint, predictor_pairs};

/// Multiple-regression plane evaluated on a uniform grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaneGrid {
    /// Degree-day samples
    pub axis_a: Array1<f64>,
    /// Predictor samples
    pub axis_b: Array1<f64>,
    /// `z[[i, j]]` is the plane at `(axis_a[i], axis_b[j])`
    pub z: Array2<f64>,
}

impl PlaneGrid {
    /// Evaluate the plane over the observed ranges of `a` and `b`.
    ///
    /// Each axis gets `samples` values from its minimum to its maximum. An
    /// axis whose values are all equal repeats that value. `None` when either
    /// axis is empty or fewer than two samples are requested.
    pub fn evaluate(
        coefficients: &CoefficientVector,
        a: &[f64],
        b: &[f64],
        samples: usize,
    ) -> Option<Self> {
        if samples < 2 {
            return None;
        }

        let axis_a = Array1::from(Extent::of(a)?.samples(samples));
        let axis_b = Array1::from(Extent::of(b)?.samples(samples));
        let z = Array2::from_shape_fn((samples, samples), |(i, j)| {
            coefficients.evaluate(axis_a[i], axis_b[j])
        });

        Some(Self { axis_a, axis_b, z })
    }

    /// Evaluate the plane over the degree-day (`x`) and predictor (`z`)
    /// ranges of multiple-mode points
    pub fn from_points(
        coefficients: &CoefficientVector,
        points: &[ChartPoint],
        samples: usize,
    ) -> Option<Self> {
        let (a, b) = predictor_pairs(points);
        Self::evaluate(coefficients, &a, &b, samples)
    }

    /// Number of grid vertices
    pub fn n_vertices(&self) -> usize {
        self.z.len()
    }

    /// Vertices as `[a, b, z]`, row by row
    pub fn vertices(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.z
            .indexed_iter()
            .map(|((i, j), &z)| [self.axis_a[i], self.axis_b[j], z])
    }
}
