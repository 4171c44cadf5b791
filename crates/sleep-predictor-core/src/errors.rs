// ABOUTME: Unified error handling for configuration, input, and prediction failures
// ABOUTME: Defines ErrorCode taxonomy, AppError, and the JSON error response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the predictor returns [`AppResult`]. Errors fall
//! into three families:
//!
//! - **Configuration** errors happen while loading the classifier artifact and
//!   halt the process before any interaction is possible.
//! - **Input** errors only exist at the collector boundary (strict builders,
//!   JSON input documents). Bounded controls cannot produce them.
//! - **Prediction** errors happen when the classifier call fails or its output
//!   breaks the contract. No partial result is shown.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input (3000-3999)
    /// Input document could not be parsed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A metric lies outside its declared range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Classifier invocation (5000-5999)
    /// Classifier call failed or returned output that breaks its contract
    #[serde(rename = "PREDICTION_FAILED")]
    PredictionFailed = 5000,

    // Configuration (6000-6999)
    /// Required configuration (e.g. the model artifact) is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration is present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Rendering or parsing of structured data failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for this error (sysexits.h conventions)
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            // EX_DATAERR
            Self::InvalidInput | Self::ValueOutOfRange => 65,
            // EX_CONFIG
            Self::ConfigMissing | Self::ConfigInvalid => 78,
            // EX_SOFTWARE
            Self::PredictionFailed | Self::InternalError | Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::PredictionFailed => "The prediction could not be computed",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this error belongs to the configuration family
    #[must_use]
    pub const fn is_configuration(self) -> bool {
        matches!(self, Self::ConfigMissing | Self::ConfigInvalid)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its declared range
    #[must_use]
    pub fn out_of_range(field: &str, value: i64, min: u32, max: u32) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} = {value} is outside [{min}, {max}]"),
        )
    }

    /// Classifier invocation failed
    #[must_use]
    pub fn prediction(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PredictionFailed, message)
    }

    /// Missing configuration
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Structured error output (used for `--format json`)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Message of the underlying cause, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
                cause: error.source.as_ref().map(ToString::to_string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_status() {
        assert_eq!(ErrorCode::ConfigMissing.exit_code(), 78);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 65);
        assert_eq!(ErrorCode::PredictionFailed.exit_code(), 70);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::config_missing("models/sleep_model.json not found");
        let text = error.to_string();
        assert!(text.starts_with("Required configuration is missing"));
        assert!(text.ends_with("models/sleep_model.json not found"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::out_of_range("age", 140, 10, 100);
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert!(json.contains("VALUE_OUT_OF_RANGE"));
        assert!(json.contains("age = 140"));
        assert!(!json.contains("cause"));
    }
}
