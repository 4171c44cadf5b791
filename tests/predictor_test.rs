// ABOUTME: Integration tests for the predictor cycle and result rendering
// ABOUTME: Covers artifact loading at start, classify-then-evaluate, and text/JSON output
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::FixedClassifier;
use sleep_disorder_predictor::config::PredictorConfig;
use sleep_disorder_predictor::constants::display;
use sleep_disorder_predictor::errors::{AppError, ErrorCode};
use sleep_disorder_predictor::formatters::{
    format_error, format_evaluation, render_field_catalogue, OutputFormat,
};
use sleep_disorder_predictor::intelligence::{RiskSeverity, BALANCED_MESSAGE};
use sleep_disorder_predictor::models::MetricField;
use sleep_disorder_predictor::predictor::Predictor;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

fn stub_predictor(label: &str, probabilities: &[f64]) -> Predictor {
    Predictor::new(Arc::new(FixedClassifier::new(label, probabilities)))
}

#[test]
fn test_predict_with_stub_classifier() {
    common::init_test_logging();
    let predictor = stub_predictor("Insomnia", &[0.876_54, 0.1, 0.023_46]);
    let result = predictor.predict(&common::all_triggers_metrics()).unwrap();

    assert_eq!(result.prediction.label, "Insomnia");
    assert_eq!(result.prediction.confidence_percent, 87.65);
    assert_eq!(result.suggestions.suggestions().len(), 5);
    assert_eq!(result.risks.worst_severity(), RiskSeverity::Error);
}

#[test]
fn test_invocation_failure_yields_no_result() {
    let predictor = Predictor::new(Arc::new(FixedClassifier::failing()));
    let error = predictor.predict(&common::balanced_metrics()).unwrap_err();
    assert_eq!(error.code, ErrorCode::PredictionFailed);
    assert_eq!(error.exit_code(), 70);
}

#[test]
fn test_predictor_is_stateless_between_calls() {
    let predictor = stub_predictor("None", &[0.05, 0.9, 0.05]);
    let first = predictor.predict(&common::all_triggers_metrics()).unwrap();
    let balanced = predictor.predict(&common::balanced_metrics()).unwrap();
    let again = predictor.predict(&common::all_triggers_metrics()).unwrap();

    assert!(balanced.suggestions.is_balanced());
    assert_eq!(first, again);
}

#[test]
fn test_load_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(common::DEMO_MODEL_JSON.as_bytes()).unwrap();
    let config = PredictorConfig::default().with_overrides(Some(file.path().to_path_buf()), None);

    let predictor = Predictor::load(&config).unwrap();
    assert_eq!(predictor.classifier().classes().len(), 3);
    let result = predictor.predict(&common::balanced_metrics()).unwrap();
    assert_eq!(result.prediction.label, "None");
}

#[test]
fn test_debug_lists_classes() {
    let predictor = stub_predictor("None", &[0.1, 0.8, 0.1]);
    let debug = format!("{predictor:?}");
    assert!(debug.starts_with("Predictor"));
    assert!(debug.contains("Sleep Apnea"));
    assert!(debug.contains("feature_count: 9"));
}

#[test]
fn test_missing_model_fails_before_interaction() {
    let config = PredictorConfig::default()
        .with_overrides(Some(PathBuf::from("/nonexistent/sleep_model.json")), None);
    let error = Predictor::load(&config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.code.is_configuration());
    assert_eq!(error.exit_code(), 78);
}

#[test]
fn test_text_report_layout() {
    let predictor = stub_predictor("Sleep Apnea", &[0.1, 0.2, 0.7]);
    let result = predictor.predict(&common::all_triggers_metrics()).unwrap();
    let text = format_evaluation(&result, OutputFormat::Text).unwrap().data;

    assert!(text.starts_with(display::TITLE));
    assert!(text.contains("Sleep Apnea (Model Confidence: 70.00%)"));
    assert!(text.contains("[HIGH] High Stress"));
    assert!(text.contains("[HIGH] Poor Sleep"));
    assert!(text.contains("[HIGH] High Blood Pressure"));
    assert!(text.contains("- Try relaxation techniques (meditation, deep breathing)."));
    assert!(text.contains("Daily Steps"));
    assert!(text.trim_end().ends_with(display::DISCLAIMER));

    let prediction = text.find(display::PREDICTION_HEADING).unwrap();
    let dashboard = text.find(display::DASHBOARD_HEADING).unwrap();
    let suggestions = text.find(display::SUGGESTIONS_HEADING).unwrap();
    let report = text.find(display::REPORT_HEADING).unwrap();
    assert!(prediction < dashboard && dashboard < suggestions && suggestions < report);
}

#[test]
fn test_text_report_balanced_message() {
    let predictor = stub_predictor("None", &[0.1, 0.8, 0.1]);
    let result = predictor.predict(&common::balanced_metrics()).unwrap();
    let text = format_evaluation(&result, OutputFormat::Text).unwrap().data;

    assert!(text.contains(BALANCED_MESSAGE));
    assert!(text.contains("[ OK ] Low Stress"));
    assert!(!text.contains("\n- "));
}

#[test]
fn test_json_report_round_trips_through_value() {
    let predictor = stub_predictor("None", &[0.1, 0.8, 0.1]);
    let result = predictor.predict(&common::balanced_metrics()).unwrap();
    let output = format_evaluation(&result, OutputFormat::Json).unwrap();

    assert_eq!(output.format, OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(value["prediction"]["confidence_percent"], 80.0);
    assert_eq!(value["suggestions"]["mode"], "balanced");
    assert_eq!(value["report"].as_array().unwrap().len(), 9);
}

#[test]
fn test_error_rendering() {
    let error = AppError::config_missing("models/sleep_model.json not found");

    let text = format_error(&error, OutputFormat::Text);
    assert!(text.starts_with("error: "));
    assert!(text.contains("models/sleep_model.json"));

    let json: serde_json::Value =
        serde_json::from_str(&format_error(&error, OutputFormat::Json)).unwrap();
    assert_eq!(json["error"]["code"], "CONFIG_MISSING");
}

#[test]
fn test_field_catalogue_lists_every_input() {
    let catalogue = render_field_catalogue();
    assert_eq!(catalogue.lines().count(), 10);
    assert!(catalogue.contains("physical_activity_level"));
    assert!(catalogue.contains("30000"));
}

#[test]
fn test_field_catalogue_shows_bounds_and_defaults() {
    let catalogue = render_field_catalogue();
    for (line, field) in catalogue.lines().skip(1).zip(MetricField::ALL) {
        assert!(line.starts_with(field.key()));
        let columns: Vec<&str> = line.split_whitespace().rev().take(3).collect();
        assert_eq!(
            columns,
            [
                field.default_value().to_string(),
                field.max().to_string(),
                field.min().to_string(),
            ]
        );
    }

    let heart_rate = catalogue
        .lines()
        .find(|line| line.starts_with("heart_rate"))
        .unwrap();
    assert!(heart_rate.trim_end().ends_with("40    120       70"));
}
