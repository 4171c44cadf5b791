// ABOUTME: Output format abstraction for rendering evaluation results
// ABOUTME: Supports a human-readable text dashboard (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, the results page as plain text
//! - **JSON**: Serde form of [`EvaluationResult`], for scripts
//!
//! Rendering only ever receives a complete [`EvaluationResult`]; failures are
//! rendered separately through [`format_error`].

use crate::constants::display;
use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::intelligence::{
    EvaluationResult, RiskSeverity, SuggestionOutcome, BALANCED_MESSAGE,
};
use crate::models::MetricField;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text dashboard (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and its format
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered result
    pub data: String,
    /// The format used
    pub format: OutputFormat,
}

/// Render an evaluation result
///
/// # Errors
///
/// Returns `SerializationError` if JSON serialization fails
pub fn format_evaluation(
    result: &EvaluationResult,
    format: OutputFormat,
) -> AppResult<FormattedOutput> {
    let data = match format {
        OutputFormat::Text => TextReport(result).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    };
    Ok(FormattedOutput { data, format })
}

/// Render a failure for the user
#[must_use]
pub fn format_error(error: &AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("error: {error}"),
        OutputFormat::Json => serde_json::to_string_pretty(&ErrorResponse::from(error))
            .unwrap_or_else(|_| format!("error: {error}")),
    }
}

/// Table of the nine inputs with range and default
#[must_use]
pub fn render_field_catalogue() -> String {
    let mut lines = vec![format!(
        "{:<26}{:<42}{:>7}{:>7}{:>9}",
        "FIELD", "LABEL", "MIN", "MAX", "DEFAULT"
    )];
    lines.extend(MetricField::ALL.into_iter().map(|field| {
        format!(
            "{:<26}{:<42}{:>7}{:>7}{:>9}",
            field.key(),
            field.label(),
            field.min(),
            field.max(),
            field.default_value()
        )
    }));
    lines.join("\n")
}

/// Text dashboard for one result
pub struct TextReport<'a>(pub &'a EvaluationResult);

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.len()))
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "{}", display::TITLE)?;
        writeln!(f, "{}", display::SUBTITLE)?;

        heading(f, display::PREDICTION_HEADING)?;
        writeln!(
            f,
            "{} (Model Confidence: {:.2}%)",
            result.prediction.label, result.prediction.confidence_percent
        )?;

        heading(f, display::DASHBOARD_HEADING)?;
        for (label, severity) in result.risks.badges() {
            writeln!(f, "{} {label}", severity.badge())?;
        }

        heading(f, display::SUGGESTIONS_HEADING)?;
        match &result.suggestions {
            SuggestionOutcome::Suggestions(items) => {
                for item in items {
                    writeln!(f, "- {}", item.message())?;
                }
            }
            SuggestionOutcome::Balanced => {
                writeln!(f, "{} {BALANCED_MESSAGE}", RiskSeverity::Success.badge())?;
            }
        }

        heading(f, display::REPORT_HEADING)?;
        writeln!(f, "{:<20}{:>8}", "Feature", "Value")?;
        for row in &result.report {
            writeln!(f, "{:<20}{:>8}", row.feature, row.value)?;
        }

        writeln!(f)?;
        writeln!(f, "---")?;
        write!(f, "{}", display::DISCLAIMER)
    }
}
