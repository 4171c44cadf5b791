// ABOUTME: Core data models shared by the collector, classifier, and evaluator
// ABOUTME: Re-exports health metric records and classifier output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models for one evaluation cycle.
//!
//! A [`HealthMetrics`] record is built once per interaction, turned into a
//! [`FeatureVector`] for the classifier, and read again by the evaluator
//! together with the resulting [`ClassifierOutput`].

/// Health metric record, field catalogue, and builder
pub mod metrics;

/// Classifier output (label plus probability distribution)
pub mod prediction;

pub use metrics::{FeatureVector, HealthMetrics, HealthMetricsBuilder, MetricField};
pub use prediction::{ClassProbability, ClassifierOutput, DISTRIBUTION_SUM_TOLERANCE};
