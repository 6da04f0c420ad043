//! Normalized point clouds

use serde::Serialize;

use super::Extent;
use crate::points::ChartPoint;

/// A point scaled into the `[-1, 1]` cube
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Min-max normalize one axis to `[-1, 1]`.
///
/// The minimum maps to exactly -1 and the maximum to exactly 1. When all
/// values are equal every value maps to 0.
pub fn normalize_axis(values: &[f64]) -> Vec<f64> {
    let Some(extent) = Extent::of(values) else {
        return Vec::new();
    };
    values.iter().map(|&v| extent.normalize(v)).collect()
}

/// Normalize each axis of a 3D point set independently
pub fn normalize_cloud(points: &[[f64; 3]]) -> Vec<NormalizedPoint> {
    let axis = |k: usize| {
        let values: Vec<f64> = points.iter().map(|p| p[k]).collect();
        normalize_axis(&values)
    };
    let (xs, ys, zs) = (axis(0), axis(1), axis(2));

    xs.into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| NormalizedPoint { x, y, z })
        .collect()
}

/// Normalized cloud of multiple-mode points, laid out as
/// (degree days, predictor, usage). Points without a predictor are skipped.
pub fn cloud_from_points(points: &[ChartPoint]) -> Vec<NormalizedPoint> {
    let raw: Vec<[f64; 3]> = points
        .iter()
        .filter_map(|p| p.z.map(|z| [p.x, z, p.y]))
        .collect();
    normalize_cloud(&raw)
}
