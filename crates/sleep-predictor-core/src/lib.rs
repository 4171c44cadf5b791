// ABOUTME: Core types and constants for the sleep disorder predictor
// ABOUTME: Foundation crate with error handling, input bounds, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sleep Predictor Core
//!
//! Foundation crate providing shared types and constants for the sleep disorder
//! predictor. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Input bounds, form defaults, and display text
//! - **models**: `HealthMetrics`, `MetricField`, `FeatureVector`, `ClassifierOutput`

/// Unified error handling system with standard error codes and exit statuses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (health metrics, feature vectors, classifier output)
pub mod models;
