//! Regression chart engine for DegreeLens
//!
//! Turns a dataset snapshot and the current variant selection into
//! everything a chart needs: the observation points, regression line and
//! plane geometry, the equation and the statistics table.
//!
//! All derived values are pure functions of the snapshot and the
//! [`VariantState`]; [`ChartSession`] only tracks which snapshot is loaded.

pub mod config;
pub mod error;
pub mod geometry;
pub mod payload;
pub mod points;
pub mod session;
pub mod stats;
pub mod variant;

// Re-exports
pub use config::{ChartConfig, LineDomain, ProjectionAxis};
pub use error::{ChartError, Result};
pub use payload::{InterpretationPayload, interpretation_payload};
pub use points::{ChartPoint, extract};
pub use session::{ChartSession, ChartView};
pub use variant::{RegressionFamily, RegressionMode, ResultIndex, ResultKey, VariantState};
