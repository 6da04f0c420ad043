//! Tests for statistics formatting

use crate::stats::*;
use crate::variant::{RegressionFamily, RegressionMode, VariantState};
use dd_core::data::{
    Coefficient, Dataset, ModelSummary, Parameters, Predictor, ProbValue, RegressionResult,
    RegressionResults, ResultMap, Unit,
};

// ==================== Test Fixtures ====================

fn simple_result() -> RegressionResult {
    RegressionResult::new(vec![
        Coefficient::intercept(50.0).with_p_value(0.2),
        Coefficient::new("hdd(60)", 5.0).with_p_value(0.0123456789),
    ])
    .with_summary(ModelSummary {
        r_squared: Some(0.91234),
        adj_r_squared: Some(0.9),
        f_statistic: Some(120.25),
        prob_f_statistic: Some(ProbValue::Text("3.1e-05".to_string())),
        observations: Some(24.0),
    })
    .with_condition_number(42.0)
}

fn multiple_result() -> RegressionResult {
    RegressionResult::new(vec![
        Coefficient::intercept(40.0),
        Coefficient::new("hdd(60)", 4.0).with_p_value(0.01),
        Coefficient::new("predictor_1", -1.5).with_p_value(1e-9),
    ])
}

fn dataset(kind: &str) -> Dataset {
    let mut results = RegressionResults::default();
    results
        .simple_regressions
        .insert("hdd(60)".to_string(), Some(simple_result()));
    results.simple_regressions.insert("none".to_string(), None);
    results
        .multiple_regressions
        .insert("hdd(60)_Occupancy".to_string(), Some(multiple_result()));

    let parameters = Parameters {
        kind: Some(kind.to_string()),
        predictors: vec![Predictor::new("Occupancy")],
        ..Parameters::default()
    };
    Dataset::new(parameters, Vec::new(), results)
}

// ==================== Equation ====================

#[test]
fn test_equation_simple() {
    let labels = EquationLabels::simple("HDD (60°C)");
    assert_eq!(
        format_equation(Some(&simple_result()), &labels),
        "50.00 +5.00 × HDD (60°C)"
    );
}

#[test]
fn test_equation_negative_coefficient_keeps_single_sign() {
    let labels = EquationLabels::multiple("HDD (60°F)", "Occupancy");
    assert_eq!(
        format_equation(Some(&multiple_result()), &labels),
        "40.00 +4.00 × HDD (60°F) -1.50 × Occupancy"
    );

    assert_eq!(format_signed(5.0), "+5.00");
    assert_eq!(format_signed(-5.0), "-5.00");
    assert_eq!(format_signed(0.0), "+0.00");
    assert_eq!(format_signed(-0.0), "+0.00");
}

#[test]
fn test_equation_not_available() {
    let simple = EquationLabels::simple("x");
    let multiple = EquationLabels::multiple("x", "y");

    assert_eq!(format_equation(None, &simple), NOT_AVAILABLE);
    assert_eq!(format_equation(Some(&RegressionResult::default()), &simple), "N/A");
    assert_eq!(
        format_equation(Some(&RegressionResult::new(vec![Coefficient::intercept(1.0)])), &simple),
        "N/A"
    );
    // Two terms cannot fill a three-term equation
    assert_eq!(format_equation(Some(&simple_result()), &multiple), "N/A");

    let mut missing = simple_result();
    missing.coefficients[1].coef = Some(f64::NAN);
    assert_eq!(format_equation(Some(&missing), &simple), "N/A");
}

#[test]
fn test_chart_equation_line() {
    let labels = EquationLabels::simple("HDD (60°C)");
    assert_eq!(
        chart_equation(Some(&simple_result()), &labels, "Usage"),
        "Usage = 50.00 +5.00 × HDD (60°C) (R² = 0.912)"
    );
    assert_eq!(
        chart_equation(None, &labels, "Usage"),
        "Usage = N/A (R² = N/A)"
    );
}

#[test]
fn test_labels_for_variant() {
    let state = VariantState::new(RegressionMode::Multiple, Some("cdd(65)".to_string()));
    assert_eq!(
        EquationLabels::for_variant(&state, "Occupancy", Unit::Imperial),
        EquationLabels::multiple("CDD (65°F)", "Occupancy")
    );

    let state = VariantState::new(RegressionMode::PredictorOnly, None);
    assert_eq!(
        EquationLabels::for_variant(&state, "Production", Unit::Metric),
        EquationLabels::simple("Production")
    );
}

#[test]
fn test_labels_for_result_use_term_names() {
    let labels = EquationLabels::for_result(
        &multiple_result(),
        RegressionFamily::Multiple,
        "Occupancy",
        Unit::Metric,
    );
    assert_eq!(labels, EquationLabels::multiple("HDD (60°C)", "Occupancy"));

    let predictor_only = RegressionResult::new(vec![
        Coefficient::intercept(1.0),
        Coefficient::new("predictor_1", 2.0),
    ]);
    let labels = EquationLabels::for_result(
        &predictor_only,
        RegressionFamily::Simple,
        "Production",
        Unit::Metric,
    );
    assert_eq!(labels, EquationLabels::simple("Production"));
}

// ==================== Metrics ====================

#[test]
fn test_metric_precision() {
    let result = simple_result();
    let result = Some(&result);

    assert_eq!(format_metric(result, Metric::RSquared), "0.912");
    assert_eq!(format_metric(result, Metric::AdjRSquared), "0.900");
    assert_eq!(format_metric(result, Metric::FStatistic), "120.25");
    assert_eq!(format_metric(result, Metric::ProbFStatistic), "3.1e-05");
    assert_eq!(format_metric(result, Metric::ConditionNumber), "42.00");
    assert_eq!(format_metric(result, Metric::Observations), "24");
    assert_eq!(format_metric(result, Metric::PValue(1)), "0.012346");
    assert_eq!(format_metric(result, Metric::Coefficient(0)), "50.00");
}

#[test]
fn test_exact_ties_round_away_from_zero() {
    assert_eq!(format_signed(0.125), "+0.13");
    assert_eq!(format_signed(-0.125), "-0.13");
    assert_eq!(to_fixed(2.5, 0), "3");
    assert_eq!(to_fixed(-0.0, 2), "0.00");

    // 1.005 is stored just below the tie
    assert_eq!(to_fixed(1.005, 2), "1.00");
    assert_eq!(to_fixed(0.124, 2), "0.12");

    let mut result = RegressionResult::new(vec![Coefficient::intercept(0.125)]);
    result.model_summary.r_squared = Some(0.0625);
    assert_eq!(format_metric(Some(&result), Metric::RSquared), "0.063");
    assert_eq!(format_metric(Some(&result), Metric::Coefficient(0)), "0.13");
}

#[test]
fn test_missing_r_squared_is_not_available() {
    let mut result = simple_result();
    result.model_summary.r_squared = None;
    assert_eq!(format_metric(Some(&result), Metric::RSquared), "N/A");
    assert_eq!(
        format_metric_path(Some(&result), "model_summary.r_squared"),
        "N/A"
    );
}

#[test]
fn test_non_finite_and_missing_values() {
    let mut result = simple_result();
    result.model_summary.f_statistic = Some(f64::INFINITY);
    result.diagnostics.condition_number = Some(f64::NAN);

    assert_eq!(format_metric(Some(&result), Metric::FStatistic), "N/A");
    assert_eq!(format_metric(Some(&result), Metric::ConditionNumber), "N/A");
    assert_eq!(format_metric(Some(&result), Metric::PValue(7)), "N/A");
    assert_eq!(format_metric(None, Metric::Observations), "N/A");
}

#[test]
fn test_observation_count_zero_is_shown() {
    let mut result = simple_result();
    result.model_summary.observations = Some(0.0);
    assert_eq!(format_metric(Some(&result), Metric::Observations), "0");
}

#[test]
fn test_p_value_formatting() {
    assert_eq!(format_p_value(Some(0.05)), "0.050000");
    assert_eq!(format_p_value(Some(1.2e-9)), "1.20e-9");
    assert_eq!(format_p_value(Some(0.0)), "0.000000");
    assert_eq!(format_p_value(Some(f64::NAN)), "N/A");
    assert_eq!(format_p_value(None), "N/A");
}

#[test]
fn test_prob_passthrough() {
    let text = |s: &str| ProbValue::Text(s.to_string());

    assert_eq!(format_prob(Some(&text("<0.001"))), "<0.001");
    assert_eq!(format_prob(Some(&text("nan"))), "N/A");
    assert_eq!(format_prob(Some(&text("NaN"))), "N/A");
    assert_eq!(format_prob(Some(&text(""))), "N/A");
    assert_eq!(format_prob(Some(&ProbValue::Number(0.25))), "0.250000");
    assert_eq!(format_prob(None), "N/A");
}

#[test]
fn test_metric_paths() {
    assert_eq!(Metric::from_path("model_summary.r_squared"), Some(Metric::RSquared));
    assert_eq!(
        Metric::from_path("coefficients.2.p_value"),
        Some(Metric::PValue(2))
    );
    assert_eq!(
        Metric::from_path("coefficients.0.coef"),
        Some(Metric::Coefficient(0))
    );
    assert_eq!(Metric::from_path("coefficients.x.coef"), None);
    assert_eq!(Metric::from_path("model_summary.aic"), None);

    for metric in [Metric::ConditionNumber, Metric::PValue(1), Metric::Observations] {
        assert_eq!(Metric::from_path(&metric.path()), Some(metric));
    }

    assert_eq!(format_metric_path(Some(&simple_result()), "bogus"), "N/A");
}

// ==================== Tables ====================

#[test]
fn test_column_headers() {
    assert_eq!(column_header("none", RegressionFamily::Simple, "Occupancy"), "Occupancy");
    assert_eq!(column_header("hdd(60)", RegressionFamily::Simple, "Occupancy"), "HDD(60)");
    assert_eq!(
        column_header("cdd(65.5)_Occupancy", RegressionFamily::Multiple, "Occupancy"),
        "CDD(65.5) & Occupancy"
    );
    assert_eq!(column_header("custom", RegressionFamily::Multiple, "Occupancy"), "custom");
}

#[test]
fn test_standard_rows() {
    let simple: Vec<String> = standard_rows(RegressionFamily::Simple, "Occupancy")
        .into_iter()
        .map(|row| row.title)
        .collect();
    assert_eq!(
        simple,
        vec![
            "Equation",
            "R²",
            "Adjusted R²",
            "p-value",
            "F-statistic",
            "p-value (F-statistic)",
            "Condition Number",
            "Observations",
        ]
    );

    let multiple = standard_rows(RegressionFamily::Multiple, "Occupancy");
    assert_eq!(multiple.len(), 9);
    assert_eq!(multiple[4].title, "p-value (Occupancy)");
    assert_eq!(multiple[4].value, RowValue::Metric(Metric::PValue(2)));
    assert!(multiple.iter().all(|row| !row.description.is_empty() && !row.guidance.is_empty()));
}

#[test]
fn test_build_table_keeps_columns_and_fills_gaps() {
    let data = dataset("hdd");
    let results = results_for_family(&data, RegressionFamily::Simple);
    let context = CellContext::new(RegressionFamily::Simple, "Occupancy", Unit::Metric);
    let table = build_table(&results, &standard_rows(RegressionFamily::Simple, "Occupancy"), &context);

    assert_eq!(table.headers, vec!["HDD(60)", "Occupancy"]);
    assert_eq!(table.n_columns(), 2);

    let equation = table.row("Equation").unwrap();
    assert_eq!(equation.cells, vec!["50.00 +5.00 × HDD (60°C)", "N/A"]);

    for row in &table.rows {
        assert_eq!(row.cells.len(), 2);
        assert!(row.cells.iter().all(|cell| !cell.is_empty()));
        assert_eq!(row.cells[1], "N/A");
    }

    let rendered = table.to_string();
    assert!(rendered.starts_with("Metric"));
    assert!(rendered.contains("HDD(60)"));
    assert_eq!(rendered.lines().count(), 2 + table.rows.len());
}

#[test]
fn test_build_table_column_order_follows_map() {
    let mut results = ResultMap::new();
    results.insert("hdd(65)".to_string(), Some(simple_result()));
    results.insert("cdd(60)".to_string(), None);
    results.insert("hdd(55)".to_string(), Some(simple_result()));

    let context = CellContext::new(RegressionFamily::Simple, "Occupancy", Unit::Metric);
    let rows = vec![RowSpec::new("R²", "", "", RowValue::Metric(Metric::RSquared))];
    let table = build_table(&results, &rows, &context);

    assert_eq!(table.headers, vec!["HDD(65)", "CDD(60)", "HDD(55)"]);
    assert_eq!(table.rows[0].cells, vec!["0.912", "N/A", "0.912"]);
}

#[test]
fn test_results_for_family_without_weather() {
    let without_weather = dataset("none");

    let simple = results_for_family(&without_weather, RegressionFamily::Simple);
    assert_eq!(simple.keys().collect::<Vec<_>>(), vec!["none"]);
    assert!(simple["none"].is_none());

    let multiple = results_for_family(&without_weather, RegressionFamily::Multiple);
    assert_eq!(multiple.keys().collect::<Vec<_>>(), vec!["none"]);

    let with_weather = results_for_family(&dataset("hdd"), RegressionFamily::Multiple);
    assert_eq!(with_weather.keys().collect::<Vec<_>>(), vec!["hdd(60)_Occupancy"]);
}

#[cfg(feature = "proptest")]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_signed_never_doubles_sign(value in -1e9..1e9f64) {
            let text = format_signed(value);
            prop_assert!(!text.contains("+-"));
            prop_assert!(!text.contains("--"));
            prop_assert!(text.starts_with('+') || text.starts_with('-'));
        }

        #[test]
        fn test_equation_has_two_decimals(b0 in -1e4..1e4f64, b1 in -1e4..1e4f64) {
            let result = RegressionResult::new(vec![
                Coefficient::intercept(b0),
                Coefficient::new("hdd(60)", b1),
            ]);
            let equation = format_equation(Some(&result), &EquationLabels::simple("HDD"));
            prop_assert!(equation.ends_with(" × HDD"));
            prop_assert_eq!(equation.matches('.').count(), 2);
        }
    }
}
