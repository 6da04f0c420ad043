//! Tests for the chart session, configuration and interpretation payload

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use std::sync::Arc;

use crate::config::{ChartConfig, LineDomain, ProjectionAxis};
use crate::error::ChartError;
use crate::geometry::LinePoint;
use crate::payload::interpretation_payload;
use crate::session::{ChartSession, ChartView};
use crate::variant::{RegressionMode, VariantState};
use dd_core::data::{
    Coefficient, Dataset, Observation, Parameters, Predictor, RegressionResult, RegressionResults,
};

// ==================== Test Fixtures ====================

/// Two rows, one simple result: usage = 50 + 5 * hdd(60)
const SIMPLE_JSON: &str = r#"{
    "dataset": {
        "metadata": {"parameters": {"kind": "hdd", "predictors": [], "unit": "metric"}},
        "usage_data": [
            {"hdd(60)": 10, "usage": 100},
            {"hdd(60)": 20, "usage": 150}
        ],
        "regression_results": {
            "simple_regressions": {
                "hdd(60)": {
                    "coefficients": [
                        {"variable": "const", "coef": 50, "p_value": 0.5},
                        {"variable": "hdd(60)", "coef": 5, "p_value": 0.001}
                    ],
                    "model_summary": {"r_squared": 1.0, "adj_r_squared": NaN, "f_statistic": NaN, "prob_f_statistic": "nan", "observations": 2}
                }
            },
            "multiple_regressions": {}
        }
    }
}"#;

fn load(text: &str) -> Arc<Dataset> {
    Arc::new(Dataset::from_json_str(text).unwrap())
}

/// Noisy monthly data: usage = 200 + 3 * hdd(60) + 10 * occupancy + noise
fn noisy_dataset() -> Dataset {
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, 5.0).unwrap();

    let observations = (0..36)
        .map(|i| {
            let hdd = 50.0 + 40.0 * (i as f64 * 0.5).cos();
            let occupancy = 20.0 + (i % 12) as f64;
            let usage = 200.0 + 3.0 * hdd + 10.0 * occupancy + noise.sample(&mut rng);
            Observation::new()
                .with_field("begin_period", format!("month {}", i))
                .with_field("usage", usage)
                .with_field("hdd(60)", hdd)
                .with_field("hdd(65)", hdd + 12.0)
                .with_field("predictor_1", occupancy)
        })
        .collect();

    let fit = RegressionResult::new(vec![
        Coefficient::intercept(200.0),
        Coefficient::new("hdd(60)", 3.0),
        Coefficient::new("predictor_1", 10.0),
    ]);

    let mut results = RegressionResults::default();
    results.simple_regressions.insert(
        "hdd(60)".to_string(),
        Some(RegressionResult::new(vec![
            Coefficient::intercept(420.0),
            Coefficient::new("hdd(60)", 3.1),
        ])),
    );
    results
        .multiple_regressions
        .insert("hdd(60)_Occupancy".to_string(), Some(fit));

    let parameters = Parameters {
        kind: Some("hdd".to_string()),
        predictors: vec![Predictor::new("Occupancy")],
        unit: Some("imperial".to_string()),
        ..Parameters::default()
    };
    Dataset::new(parameters, observations, results)
}

// ==================== Configuration ====================

#[test]
fn test_config_defaults() {
    let config = ChartConfig::default();
    assert_eq!(config.simple_line_domain, LineDomain::ObservedRange);
    assert_eq!(config.predictor_line_domain, LineDomain::ObservedRange);
    assert_eq!(config.projection_axis, ProjectionAxis::DegreeDays);
    assert_eq!(config.grid_samples, 20);
    assert_eq!(config.predictor_fallback, "Predictor 1");
    assert_eq!(config.response_label, "Usage");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_json() {
    let config = ChartConfig::from_json_str(
        r#"{"predictor_line_domain": "origin_anchored", "projection_axis": "predictor"}"#,
    )
    .unwrap();

    assert_eq!(config.predictor_line_domain, LineDomain::OriginAnchored);
    assert_eq!(config.line_domain(RegressionMode::PredictorOnly), LineDomain::OriginAnchored);
    assert_eq!(config.line_domain(RegressionMode::Simple), LineDomain::ObservedRange);
    assert_eq!(config.projection_axis, ProjectionAxis::Predictor);
    assert_eq!(config.grid_samples, 20);
}

#[test]
fn test_config_validation() {
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"grid_samples": 1}"#),
        Err(ChartError::InvalidConfig { .. })
    ));
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"response_label": "  "}"#),
        Err(ChartError::InvalidConfig { .. })
    ));
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"simple_line_domain": "sideways"}"#),
        Err(ChartError::Serialization(_))
    ));
}

// ==================== Session ====================

#[test]
fn test_scenario_simple_line_and_equation() {
    let session = ChartSession::with_dataset(ChartConfig::default(), load(SIMPLE_JSON));
    let view = session.view().unwrap();

    assert_eq!(view.mode, RegressionMode::Simple);
    assert_eq!(view.variant_label, "Simple Regression");
    assert_eq!(view.selected_temperature.as_deref(), Some("hdd(60)"));
    assert_eq!(
        view.line,
        vec![LinePoint { x: 10.0, y: 100.0 }, LinePoint { x: 20.0, y: 150.0 }]
    );
    assert_eq!(view.equation, "Usage = 50.00 +5.00 × HDD (60°C) (R² = 1.000)");
    assert!(view.plane.is_none());
    assert!(view.projected_line.is_none());

    let table = &view.table;
    assert_eq!(table.headers, vec!["HDD(60)"]);
    assert_eq!(table.row("Equation").unwrap().cells, vec!["50.00 +5.00 × HDD (60°C)"]);
    assert_eq!(table.row("Adjusted R²").unwrap().cells, vec!["N/A"]);
    assert_eq!(table.row("F-statistic").unwrap().cells, vec!["N/A"]);
    assert_eq!(table.row("p-value (F-statistic)").unwrap().cells, vec!["N/A"]);
    assert_eq!(table.row("Observations").unwrap().cells, vec!["2"]);
}

#[test]
fn test_scenario_lexicographic_default_temperature() {
    let text = SIMPLE_JSON.replace(
        r#"{"hdd(60)": 10, "usage": 100}"#,
        r#"{"hdd(60)": 10, "cdd(65)": 1, "usage": 100}"#,
    );
    let session = ChartSession::with_dataset(ChartConfig::default(), load(&text));

    let state = session.state().unwrap();
    assert_eq!(state.selected_temperature(), Some("cdd(65)"));

    let view = session.view().unwrap();
    let keys: Vec<&str> = view.temperature_options.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, vec!["cdd(65)", "hdd(60)"]);
    // No result for cdd(65): one point, no line, equation unavailable
    assert_eq!(view.points.len(), 1);
    assert!(view.line.is_empty());
    assert_eq!(view.equation, "Usage = N/A (R² = N/A)");
}

#[test]
fn test_session_reinitializes_only_on_new_identity() {
    let data = load(SIMPLE_JSON);
    let mut session = ChartSession::new(ChartConfig::default());
    assert!(session.view().is_none());

    assert!(session.set_dataset(Some(Arc::clone(&data))));
    session.select_temperature("hdd(99)");
    assert_eq!(session.state().unwrap().selected_temperature(), Some("hdd(99)"));

    // Same snapshot: selection survives
    assert!(!session.set_dataset(Some(Arc::clone(&data))));
    assert_eq!(session.state().unwrap().selected_temperature(), Some("hdd(99)"));
    assert!(!session.view().unwrap().has_data());

    // Equal content, new identity: selection resets
    let reloaded = Arc::new((*data).clone());
    assert!(session.set_dataset(Some(reloaded)));
    assert_eq!(session.state().unwrap().selected_temperature(), Some("hdd(60)"));

    // Provider unavailable
    assert!(session.set_dataset(None));
    assert!(session.state().is_none());
    assert!(session.view().is_none());
    assert!(session.index().is_empty());
}

#[test]
fn test_load_json() {
    let mut session = ChartSession::new(ChartConfig::default());
    session.load_json(SIMPLE_JSON).unwrap();
    assert_eq!(session.view().unwrap().points.len(), 2);

    assert!(matches!(
        session.load_json("{\"unrelated\": true}"),
        Err(ChartError::Data(_))
    ));
    // A failed load keeps the previous snapshot
    assert!(session.dataset().is_some());
}

#[test]
fn test_view_is_idempotent() {
    let session = ChartSession::with_dataset(ChartConfig::default(), Arc::new(noisy_dataset()));
    assert_eq!(session.view(), session.view());
}

#[test]
fn test_multiple_view_geometry() {
    let session = ChartSession::with_dataset(ChartConfig::default(), Arc::new(noisy_dataset()));
    let view = session.view().unwrap();

    assert_eq!(view.mode, RegressionMode::Multiple);
    assert_eq!(view.variant_label, "Multiple Regression");
    assert_eq!(view.points.len(), 36);
    assert_eq!(view.tooltips.len(), 36);
    assert_eq!(view.axis_titles.x, "HDD (60°F)");
    assert_eq!(view.axis_titles.z.as_deref(), Some("Occupancy"));
    assert!(view.line.is_empty());

    let plane = view.plane.as_ref().unwrap();
    assert_eq!(plane.n_vertices(), 400);
    assert_abs_diff_eq!(
        plane.z[[0, 0]],
        200.0 + 3.0 * plane.axis_a[0] + 10.0 * plane.axis_b[0],
        epsilon = 1e-9
    );

    let projected = view.projected_line.as_ref().unwrap();
    assert_eq!(projected.points.len(), 36);
    assert!(projected.points.windows(2).all(|w| w[0].x <= w[1].x));
    let label = view.projected_label.as_deref().unwrap();
    assert!(label.starts_with("Approximation"));
    assert!(label.contains("Occupancy"));

    assert_eq!(view.cloud.len(), 36);
    assert!(view.cloud.iter().all(|p| (-1.0..=1.0).contains(&p.x)
        && (-1.0..=1.0).contains(&p.y)
        && (-1.0..=1.0).contains(&p.z)));

    assert_eq!(
        view.equation,
        "Usage = 200.00 +3.00 × HDD (60°F) +10.00 × Occupancy (R² = N/A)"
    );
    assert_eq!(view.table.headers, vec!["HDD(60) & Occupancy"]);
}

#[test]
fn test_toggle_to_simple_draws_line() {
    let mut session = ChartSession::with_dataset(ChartConfig::default(), Arc::new(noisy_dataset()));
    session.toggle_simple_multiple();

    let view = session.view().unwrap();
    assert_eq!(view.mode, RegressionMode::Simple);
    assert!(view.plane.is_none());
    assert!(view.cloud.is_empty());
    assert_eq!(view.line.len(), 2);

    let xs: Vec<f64> = view.points.iter().map(|p| p.x).collect();
    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(view.line[0].x, lo);
    assert_eq!(view.line[1].x, hi);
    assert_eq!(view.line[0].y, 420.0 + 3.1 * lo);

    // Multiple-only row spec is gone
    assert!(view.table.row("p-value (Occupancy)").is_none());
    assert_eq!(view.table.headers, vec!["HDD(60)"]);
}

#[test]
fn test_predictor_only_view() {
    let text = r#"{
        "parameters": {"kind": "none", "predictors": [{"name": "Production"}]},
        "observations": [
            {"usage": 10, "predictor_1": 1},
            {"usage": 30, "predictor_1": 3},
            {"usage": "nan", "predictor_1": 2}
        ],
        "regression_results": {
            "simple_regressions": {
                "none": {"coefficients": [{"variable": "const", "coef": 0}, {"variable": "predictor_1", "coef": 10}]}
            },
            "multiple_regressions": {"none": null}
        }
    }"#;

    let config = ChartConfig {
        predictor_line_domain: LineDomain::OriginAnchored,
        ..ChartConfig::default()
    };
    let mut session = ChartSession::with_dataset(config, load(text));
    session.toggle_simple_multiple();
    session.select_temperature("hdd(60)");

    let view = session.view().unwrap();
    assert_eq!(view.mode, RegressionMode::PredictorOnly);
    assert_eq!(view.variant_label, "Production Regression");
    assert!(view.temperature_options.is_empty());
    assert_eq!(view.points.len(), 2);
    assert_eq!(view.line[0], LinePoint { x: 0.0, y: 0.0 });
    assert_abs_diff_eq!(view.line[1].x, 3.6, epsilon = 1e-12);
    assert_eq!(view.equation, "Usage = 0.00 +10.00 × Production (R² = N/A)");
    assert_eq!(view.table.headers, vec!["Production"]);
}

#[test]
fn test_derive_without_session() {
    let data = noisy_dataset();
    let state = VariantState::new(RegressionMode::Simple, None);
    let view = ChartView::derive(
        &ChartConfig::default(),
        &data,
        &state,
        &Default::default(),
    );

    assert!(!view.has_data());
    assert!(view.line.is_empty());
    assert_eq!(view.equation, "Usage = N/A (R² = N/A)");
}

// ==================== Interpretation Payload ====================

#[test]
fn test_payload_includes_multiple_results() {
    let data = noisy_dataset();
    let state = VariantState::initialize(&data);
    let payload = interpretation_payload(&data, &state).unwrap();

    assert_eq!(
        payload
            .regression_results
            .multiple_regressions
            .keys()
            .collect::<Vec<_>>(),
        vec!["hdd(60)_Occupancy"]
    );

    let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
    assert_eq!(json["parameters"]["kind"], "hdd");
    assert_eq!(
        json["regression_results"]["multiple_regressions"]["hdd(60)_Occupancy"]["coefficients"][2]["coef"],
        10.0
    );
}

#[test]
fn test_payload_predictor_only_sends_none_entry() {
    let mut data = noisy_dataset();
    data.parameters.kind = Some("none".to_string());
    data.regression_results.multiple_regressions.insert(
        "none".to_string(),
        Some(RegressionResult::new(vec![Coefficient::intercept(1.0)])),
    );

    let state = VariantState::initialize(&data);
    assert!(state.is_predictor_only());

    let payload = interpretation_payload(&data, &state).unwrap();
    assert_eq!(
        payload
            .regression_results
            .multiple_regressions
            .keys()
            .collect::<Vec<_>>(),
        vec!["none"]
    );
}

#[test]
fn test_payload_without_results() {
    let data = load(SIMPLE_JSON);
    let state = VariantState::initialize(&data);
    assert!(matches!(
        interpretation_payload(&data, &state),
        Err(ChartError::NoResults)
    ));
}
