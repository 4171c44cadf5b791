// ABOUTME: Intelligence module for the rule layer on top of the classifier
// ABOUTME: Risk dashboard, lifestyle suggestions, thresholds, and the evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Deterministic commentary derived from a [`HealthMetrics`](crate::models::HealthMetrics)
//! record: three risk verdicts, an ordered suggestion list, and a summary of
//! the classifier's prediction.

/// Evaluator combining prediction summary, risks, suggestions, and report
pub mod evaluator;
/// Stress, sleep, and blood pressure verdicts
pub mod risk;
/// Threshold-triggered lifestyle suggestions
pub mod suggestions;
/// Rule thresholds
pub mod thresholds;

pub use evaluator::{
    confidence_percent, evaluate, report_table, EvaluationResult, PredictionSummary, ReportRow,
};
pub use risk::{BpRisk, RiskAssessment, RiskSeverity, SleepRisk, StressRisk};
pub use suggestions::{Suggestion, SuggestionOutcome, BALANCED_MESSAGE};
