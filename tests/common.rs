// ABOUTME: Shared test utilities for the predictor integration tests
// ABOUTME: Provides quiet logging, metric fixtures, and a fixed-output stub classifier
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `sleep_disorder_predictor`

use sleep_disorder_predictor::classifier::Classifier;
use sleep_disorder_predictor::errors::{AppError, AppResult};
use sleep_disorder_predictor::models::{FeatureVector, HealthMetrics};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Demo artifact shipped with the binary
pub const DEMO_MODEL_JSON: &str = include_str!("../models/sleep_model.json");

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Record for which no rule fires and every verdict is green
pub fn balanced_metrics() -> HealthMetrics {
    HealthMetrics::builder()
        .age(30)
        .sleep_duration(8)
        .quality_of_sleep(8)
        .physical_activity_level(60)
        .stress_level(3)
        .heart_rate(70)
        .daily_steps(8000)
        .bp_systolic(120)
        .bp_diastolic(80)
        .build()
        .unwrap()
}

/// Record that fires all five suggestion rules
pub fn all_triggers_metrics() -> HealthMetrics {
    HealthMetrics::builder()
        .age(55)
        .sleep_duration(4)
        .quality_of_sleep(3)
        .physical_activity_level(10)
        .stress_level(9)
        .heart_rate(110)
        .daily_steps(2000)
        .bp_systolic(150)
        .bp_diastolic(95)
        .build()
        .unwrap()
}

/// Classifier returning the same label and distribution for every input
pub struct FixedClassifier {
    classes: Vec<String>,
    label: String,
    probabilities: Vec<f64>,
    fail: bool,
}

impl FixedClassifier {
    /// Three-class stub predicting `label` with `probabilities`
    pub fn new(label: &str, probabilities: &[f64]) -> Self {
        Self {
            classes: vec!["Insomnia".into(), "None".into(), "Sleep Apnea".into()],
            label: label.into(),
            probabilities: probabilities.to_vec(),
            fail: false,
        }
    }

    /// Stub whose calls always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("None", &[0.1, 0.8, 0.1])
        }
    }
}

impl Classifier for FixedClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn feature_count(&self) -> usize {
        9
    }

    fn predict(&self, _features: &FeatureVector) -> AppResult<String> {
        if self.fail {
            return Err(AppError::prediction("stub classifier failure"));
        }
        Ok(self.label.clone())
    }

    fn predict_proba(&self, _features: &FeatureVector) -> AppResult<Vec<f64>> {
        if self.fail {
            return Err(AppError::prediction("stub classifier failure"));
        }
        Ok(self.probabilities.clone())
    }
}
