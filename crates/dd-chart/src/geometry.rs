//! Renderable geometry from regression coefficients
//!
//! Everything here is a pure function of a coefficient vector and a point
//! set: 2D line segments, the projected multiple-regression line, the 3D
//! plane grid and the normalized point cloud.

mod cloud;
mod extent;
mod line;
mod plane;


// Re-exports
pub use cloud::{NormalizedPoint, cloud_from_points, normalize_axis, normalize_cloud};
pub use extent::{Extent, mean};
pub use line::{
    CoefficientVector, LinePoint, ProjectedLine, line_segment, projected_line, regression_line,
    resolve_domain,
};
pub use plane::PlaneGrid;
