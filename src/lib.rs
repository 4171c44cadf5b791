// ABOUTME: Main library entry point for the sleep disorder predictor
// ABOUTME: Collects health metrics, runs the classifier, and evaluates risks and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sleep Disorder Predictor
//!
//! Feeds nine lifestyle and health metrics to a pre-trained classifier and
//! turns the result into a small dashboard: the predicted label with its
//! confidence, three rule-based risk verdicts, personalised suggestions, and
//! an echo of the inputs.
//!
//! ## Flow
//!
//! 1. [`collector`] builds a [`models::HealthMetrics`] record from bounded inputs.
//! 2. [`classifier`] runs the external model on the fixed-order feature vector.
//! 3. [`intelligence::evaluate`] derives every displayed artifact.
//! 4. [`formatters`] renders the result as text or JSON.
//!
//! [`predictor::Predictor`] ties steps 2 and 3 together around a classifier
//! loaded once at start.

/// Classifier capability trait and the artifact-backed implementation
pub mod classifier;

/// Input collector for the nine bounded metrics
pub mod collector;

/// Runtime configuration
pub mod config;

/// Text and JSON rendering of results
pub mod formatters;

/// Risk verdicts, suggestions, and the evaluator
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// One prediction cycle around a shared classifier
pub mod predictor;

pub use sleep_predictor_core::{constants, errors, models};
