// ABOUTME: Configuration management module for predictor runtime settings
// ABOUTME: Reads the model artifact path and output format from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: model artifact path and output format from environment
//!   variables, overridable from the command line

/// Environment-driven configuration
pub mod environment;

pub use environment::PredictorConfig;
