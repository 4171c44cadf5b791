// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Input bounds and defaults, environment variable names, and display text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large block. Input bounds live in [`metric_bounds`]; every other module
//! reads them through `MetricField` rather than directly.

/// Input bounds for the nine health metrics (inclusive `MIN`/`MAX`, plus `DEFAULT`)
pub mod metric_bounds;

/// Service names used in structured logging
pub mod service_names {
    /// Name of the prediction CLI
    pub const SLEEP_PREDICTOR: &str = "sleep-predictor";
}

/// Environment variable names
pub mod env_config {
    /// Path of the serialized classifier artifact
    pub const MODEL_PATH: &str = "SLEEP_PREDICTOR_MODEL_PATH";
    /// Output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "SLEEP_PREDICTOR_OUTPUT";
}

/// Default runtime values
pub mod defaults {
    /// Classifier artifact loaded at start when no override is given
    pub const MODEL_PATH: &str = "models/sleep_model.json";
}

/// Text shown around an evaluation result
pub mod display {
    /// Title of the results page
    pub const TITLE: &str = "Sleep Disorder Prediction";
    /// Subtitle of the results page
    pub const SUBTITLE: &str = "Get predictions + detailed health insights based on your lifestyle.";
    /// Heading of the prediction section
    pub const PREDICTION_HEADING: &str = "Prediction Result";
    /// Heading of the risk badge section
    pub const DASHBOARD_HEADING: &str = "Health Risk Dashboard";
    /// Heading of the suggestion section
    pub const SUGGESTIONS_HEADING: &str = "Personalized Suggestions";
    /// Heading of the input echo table
    pub const REPORT_HEADING: &str = "Health Summary Report";
    /// Heading of the form
    pub const FORM_HEADING: &str = "Enter Your Health Details";
    /// Footer disclaimer
    pub const DISCLAIMER: &str =
        "This app is for educational purposes only. Consult a doctor for medical advice.";
}
