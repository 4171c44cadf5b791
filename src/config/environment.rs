// ABOUTME: Environment configuration for the predictor binary
// ABOUTME: Handles environment variables and command-line overrides for runtime settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use crate::formatters::OutputFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Runtime configuration, read once at start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Classifier artifact loaded before any interaction
    pub model_path: PathBuf,
    /// How results are rendered
    pub output_format: OutputFormat,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(defaults::MODEL_PATH),
            output_format: OutputFormat::default(),
        }
    }
}

impl PredictorConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let model_path = env::var(env_config::MODEL_PATH)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(defaults::MODEL_PATH), PathBuf::from);

        let output_format = match env::var(env_config::OUTPUT_FORMAT) {
            Ok(value) => OutputFormat::parse(&value).unwrap_or_else(|| {
                warn!(
                    value = %value,
                    variable = env_config::OUTPUT_FORMAT,
                    "Unrecognised output format, using text"
                );
                OutputFormat::Text
            }),
            Err(_) => OutputFormat::default(),
        };

        let config = Self {
            model_path,
            output_format,
        };
        debug!(?config, "Loaded configuration from environment");
        config
    }

    /// Apply command-line overrides on top of the environment
    #[must_use]
    pub fn with_overrides(
        mut self,
        model_path: Option<PathBuf>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        if let Some(path) = model_path {
            self.model_path = path;
        }
        if let Some(format) = output_format {
            self.output_format = format;
        }
        self
    }
}
