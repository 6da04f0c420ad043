//! Statistics formatting
//!
//! Equations, metric values and multi-column tables built from precomputed
//! regression results. A missing or non-finite value always renders as
//! `"N/A"`, never as an empty cell or a zero.

mod equation;
mod format;
mod rows;
mod table;

#[cfg(test)]
mod tests;

// Re-exports
pub use equation::{EquationLabels, chart_equation, format_equation, format_signed};
pub use format::{
    Metric, NOT_AVAILABLE, format_metric, format_metric_path, format_p_value, format_prob,
    to_fixed,
};
pub use rows::{CellContext, RowSpec, RowValue, standard_rows};
pub use table::{StatsTable, TableRow, build_table, column_header, results_for_family};
