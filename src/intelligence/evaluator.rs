// ABOUTME: Risk and suggestion evaluator turning metrics plus classifier output into a result
// ABOUTME: Produces prediction summary, risk dashboard, suggestions, and the input report table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Evaluation of one interaction
//!
//! [`evaluate`] is a pure function: the same metrics and classifier output
//! always yield an identical [`EvaluationResult`]. It fails only when the
//! classifier output breaks its contract, and then returns nothing partial.

use super::risk::RiskAssessment;
use super::suggestions::SuggestionOutcome;
use crate::errors::AppResult;
use crate::models::{ClassifierOutput, HealthMetrics, MetricField};
use serde::Serialize;
use tracing::debug;

/// Predicted label with its confidence as a percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    /// Label from the classifier
    pub label: String,
    /// `max(distribution) * 100`, rounded to two decimals, within `[0, 100]`
    pub confidence_percent: f64,
}

impl PredictionSummary {
    /// Summarize a validated classifier output
    ///
    /// # Errors
    ///
    /// Returns `PredictionFailed` when the output breaks the classifier contract
    pub fn from_output(output: &ClassifierOutput) -> AppResult<Self> {
        output.validate()?;
        let confidence = output.confidence().unwrap_or_default();
        Ok(Self {
            label: output.label().to_owned(),
            confidence_percent: confidence_percent(confidence),
        })
    }
}

/// Convert a probability to a percentage with two decimals
///
/// Rounds `probability * 100` once, exactly as `{:.2}` formatting does, so the
/// stored value always prints the same digits as the raw percentage.
#[must_use]
pub fn confidence_percent(probability: f64) -> f64 {
    let percent = (probability * 100.0).clamp(0.0, 100.0);
    format!("{percent:.2}").parse().unwrap_or(percent)
}

/// One row of the summary report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Which input
    #[serde(skip)]
    pub field: MetricField,
    /// Display name of the input
    pub feature: &'static str,
    /// Value as entered
    pub value: u32,
}

/// Echo of all nine inputs in feature order
#[must_use]
pub fn report_table(metrics: &HealthMetrics) -> Vec<ReportRow> {
    metrics
        .entries()
        .map(|(field, value)| ReportRow {
            field,
            feature: field.report_name(),
            value,
        })
        .collect()
}

/// Everything shown after the predict action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Label and confidence
    pub prediction: PredictionSummary,
    /// Three dashboard verdicts
    pub risks: RiskAssessment,
    /// Suggestions or the balanced affirmation
    pub suggestions: SuggestionOutcome,
    /// Input echo
    pub report: Vec<ReportRow>,
}

/// Evaluate one record against the classifier's output for it
///
/// # Errors
///
/// Returns `PredictionFailed` when `output` has an empty, negative, or
/// unnormalised distribution
pub fn evaluate(metrics: &HealthMetrics, output: &ClassifierOutput) -> AppResult<EvaluationResult> {
    let prediction = PredictionSummary::from_output(output)?;
    let risks = RiskAssessment::assess(metrics);
    let suggestions = SuggestionOutcome::evaluate(metrics);

    debug!(
        label = %prediction.label,
        confidence = prediction.confidence_percent,
        stress = ?risks.stress,
        sleep = ?risks.sleep,
        blood_pressure = ?risks.blood_pressure,
        suggestions = suggestions.suggestions().len(),
        "Evaluated health metrics"
    );

    Ok(EvaluationResult {
        prediction,
        risks,
        suggestions,
        report: report_table(metrics),
    })
}
