// ABOUTME: Classifier output model with predicted label and class probability distribution
// ABOUTME: Validates the distribution contract and exposes confidence as its maximum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Allowed deviation of the probability sum from 1.0
pub const DISTRIBUTION_SUM_TOLERANCE: f64 = 1e-3;

/// Probability assigned to one class label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    /// Class label as known to the classifier
    pub label: String,
    /// Probability in `[0, 1]`
    pub probability: f64,
}

/// Label and distribution returned by the external classifier
///
/// The label set is whatever the classifier was trained on; nothing here
/// assumes particular class names or a particular number of classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    label: String,
    distribution: Vec<ClassProbability>,
}

impl ClassifierOutput {
    /// Pair a predicted label with its distribution (classifier class order)
    #[must_use]
    pub fn new(label: impl Into<String>, distribution: Vec<ClassProbability>) -> Self {
        Self {
            label: label.into(),
            distribution,
        }
    }

    /// Build from parallel label/probability slices
    ///
    /// # Errors
    ///
    /// Returns `PredictionFailed` when the slices differ in length
    pub fn from_parallel(
        label: impl Into<String>,
        classes: &[String],
        probabilities: &[f64],
    ) -> AppResult<Self> {
        if classes.len() != probabilities.len() {
            return Err(AppError::prediction(format!(
                "classifier returned {} probabilities for {} classes",
                probabilities.len(),
                classes.len()
            )));
        }
        let distribution = classes
            .iter()
            .zip(probabilities)
            .map(|(class, &probability)| ClassProbability {
                label: class.clone(),
                probability,
            })
            .collect();
        Ok(Self::new(label, distribution))
    }

    /// Predicted label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Probability per class, in classifier class order
    #[must_use]
    pub fn distribution(&self) -> &[ClassProbability] {
        &self.distribution
    }

    /// Maximum probability, or `None` for an empty distribution
    #[must_use]
    pub fn confidence(&self) -> Option<f64> {
        self.distribution
            .iter()
            .map(|class| class.probability)
            .reduce(f64::max)
    }

    /// Check the collaborator contract
    ///
    /// The distribution must be non-empty, every entry finite and
    /// non-negative, and the total within [`DISTRIBUTION_SUM_TOLERANCE`] of 1.
    ///
    /// # Errors
    ///
    /// Returns `PredictionFailed` describing the first violation
    pub fn validate(&self) -> AppResult<()> {
        if self.distribution.is_empty() {
            return Err(AppError::prediction(
                "classifier returned an empty probability distribution",
            ));
        }
        if let Some(bad) = self
            .distribution
            .iter()
            .find(|class| !class.probability.is_finite() || class.probability < 0.0)
        {
            return Err(AppError::prediction(format!(
                "invalid probability {} for class '{}'",
                bad.probability, bad.label
            )));
        }
        let total: f64 = self.distribution.iter().map(|class| class.probability).sum();
        if (total - 1.0).abs() > DISTRIBUTION_SUM_TOLERANCE {
            return Err(AppError::prediction(format!(
                "probabilities sum to {total:.6}, expected 1.0"
            )));
        }
        Ok(())
    }
}
