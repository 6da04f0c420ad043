//! Chart session
//!
//! Tracks the loaded snapshot and the variant selection, and derives
//! everything the chart and statistics views display. The snapshot is
//! shared, never copied; a new snapshot identity resets the selection.

use serde::Serialize;
use std::sync::Arc;

use crate::config::{ChartConfig, ProjectionAxis};
use crate::error::Result;
use crate::geometry::{
    CoefficientVector, LinePoint, NormalizedPoint, PlaneGrid, ProjectedLine, cloud_from_points,
    projected_line, regression_line,
};
use crate::points::{ChartPoint, extract, sort_by_x};
use crate::stats::{
    CellContext, EquationLabels, StatsTable, build_table, chart_equation, results_for_family,
    standard_rows,
};
use crate::variant::{
    AxisTitles, RegressionMode, ResultIndex, TemperatureOption, VariantState, temperature_options,
};
use dd_core::data::Dataset;

#[cfg(test)]
mod tests;

/// Session state of one chart component
#[derive(Debug, Clone, Default)]
pub struct ChartSession {
    config: ChartConfig,
    dataset: Option<Arc<Dataset>>,
    index: ResultIndex,
    state: Option<VariantState>,
}

impl ChartSession {
    /// Create an empty session
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a session with a loaded snapshot
    pub fn with_dataset(config: ChartConfig, dataset: Arc<Dataset>) -> Self {
        let mut session = Self::new(config);
        session.set_dataset(Some(dataset));
        session
    }

    /// Install a snapshot, or `None` while the provider has none.
    ///
    /// The variant state is rebuilt only when the snapshot identity
    /// changes. Returns whether it was rebuilt.
    pub fn set_dataset(&mut self, dataset: Option<Arc<Dataset>>) -> bool {
        let unchanged = match (&self.dataset, &dataset) {
            (Some(current), Some(next)) => Arc::ptr_eq(current, next),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        match &dataset {
            Some(data) => {
                let predictor = self.config.predictor_name(data);
                self.index = ResultIndex::build(&data.regression_results, predictor);
                let state = VariantState::initialize(data);
                tracing::debug!(
                    mode = %state.mode(),
                    temperature = state.selected_temperature(),
                    results = self.index.len(),
                    "initialized chart session for new dataset"
                );
                self.state = Some(state);
            }
            None => {
                self.index = ResultIndex::default();
                self.state = None;
            }
        }
        self.dataset = dataset;
        true
    }

    /// Parse provider JSON and install it as a new snapshot
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        let dataset = Dataset::from_json_str(text)?;
        self.set_dataset(Some(Arc::new(dataset)));
        Ok(())
    }

    /// Select a temperature field
    pub fn select_temperature(&mut self, key: &str) {
        self.state = self.state.take().map(|s| s.select_temperature(key));
    }

    /// Flip between simple and multiple regression
    pub fn toggle_simple_multiple(&mut self) {
        self.state = self.state.take().map(VariantState::toggle_simple_multiple);
    }

    /// Configuration
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Loaded snapshot
    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    /// Current variant state
    pub fn state(&self) -> Option<&VariantState> {
        self.state.as_ref()
    }

    /// Result index of the loaded snapshot
    pub fn index(&self) -> &ResultIndex {
        &self.index
    }

    /// Derive the current view, `None` while no snapshot is loaded
    pub fn view(&self) -> Option<ChartView> {
        let dataset = self.dataset.as_deref()?;
        let state = self.state.as_ref()?;
        Some(ChartView::derive(&self.config, dataset, state, &self.index))
    }
}

/// Everything a chart and its statistics table display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub mode: RegressionMode,
    /// Chart heading
    pub variant_label: String,
    pub temperature_options: Vec<TemperatureOption>,
    pub selected_temperature: Option<String>,
    pub axis_titles: AxisTitles,
    /// Points in input order
    pub points: Vec<ChartPoint>,
    /// Tooltip lines, one entry per point
    pub tooltips: Vec<Vec<String>>,
    /// Two-point regression line, simple and predictor-only modes
    pub line: Vec<LinePoint>,
    /// Approximate 2D projection of the plane, multiple mode
    pub projected_line: Option<ProjectedLine>,
    /// Legend text of the projected line
    pub projected_label: Option<String>,
    /// Regression plane, multiple mode
    pub plane: Option<PlaneGrid>,
    /// Normalized 3D cloud, multiple mode
    pub cloud: Vec<NormalizedPoint>,
    /// `"{response} = {equation} (R² = {r2})"`
    pub equation: String,
    #[serde(skip)]
    pub table: StatsTable,
}

impl ChartView {
    /// Derive the view of a snapshot under a variant state
    pub fn derive(
        config: &ChartConfig,
        dataset: &Dataset,
        state: &VariantState,
        index: &ResultIndex,
    ) -> Self {
        let predictor = config.predictor_name(dataset);
        let unit = dataset.parameters.unit();
        let mode = state.mode();

        let result = state.result_key(predictor).and_then(|key| {
            let found = index.get(&key);
            if found.is_none() {
                tracing::debug!(key = %key, "no regression result for variant");
            }
            found
        });

        let points = extract(&dataset.observations, state);
        let axis_titles = state.axis_titles(predictor, unit, &config.response_label);
        let tooltips = points.iter().map(|p| p.tooltip(&axis_titles)).collect();

        let mut line = Vec::new();
        let mut projected = None;
        let mut plane = None;
        let mut cloud = Vec::new();

        match (mode, result) {
            (RegressionMode::Multiple, Some(result)) => {
                let coefficients = CoefficientVector::from_result(result);
                projected = projected_line(&coefficients, &points, config.projection_axis);
                plane = PlaneGrid::from_points(&coefficients, &points, config.grid_samples);
                cloud = cloud_from_points(&points);
            }
            (RegressionMode::Multiple, None) => {
                cloud = cloud_from_points(&points);
            }
            (_, Some(result)) => {
                let mut sorted = points.clone();
                sort_by_x(&mut sorted);
                line = regression_line(result, &sorted, config.line_domain(mode));
            }
            (_, None) => {}
        }

        let projected_label = projected.as_ref().map(|p: &ProjectedLine| {
            let held = match p.axis {
                ProjectionAxis::DegreeDays => predictor,
                ProjectionAxis::Predictor => axis_titles.x.as_str(),
            };
            p.label(held)
        });

        let labels = EquationLabels::for_variant(state, predictor, unit);
        let equation = chart_equation(result, &labels, &config.response_label);

        let family = state.family();
        let context = CellContext::new(family, predictor, unit);
        let table = build_table(
            &results_for_family(dataset, family),
            &standard_rows(family, predictor),
            &context,
        );

        Self {
            mode,
            variant_label: state.label(predictor),
            temperature_options: temperature_options(dataset, state),
            selected_temperature: state.selected_temperature().map(str::to_string),
            axis_titles,
            points,
            tooltips,
            line,
            projected_line: projected,
            projected_label,
            plane,
            cloud,
            equation,
            table,
        }
    }

    /// Check if there is anything to plot; callers show a "no data" state
    /// otherwise
    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
    }
}
