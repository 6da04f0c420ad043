//! Axis extents

use serde::Serialize;
use statrs::statistics::Statistics;

/// Observed range of one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Range of a set of values, `None` when empty
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            min: Statistics::min(values),
            max: Statistics::max(values),
        })
    }

    /// `max - min`
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check if every value was equal
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Map a value to `[-1, 1]`. A degenerate axis maps everything to 0.
    ///
    /// `min` and `max` map to exactly -1 and 1, also when `max - min`
    /// overflows.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let span = self.span();
        let t = if span.is_finite() {
            (value - self.min) / span
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        };
        2.0 * t - 1.0
    }

    /// `samples` evenly spaced values from `min` to `max`
    pub fn samples(&self, samples: usize) -> Vec<f64> {
        let steps = samples.saturating_sub(1).max(1) as f64;
        let span = self.span();
        (0..samples)
            .map(|i| self.min + span * i as f64 / steps)
            .collect()
    }
}

/// Arithmetic mean, `None` when empty
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(Statistics::mean(values))
}
