// ABOUTME: Softmax-regression classifier loaded from a JSON model artifact
// ABOUTME: Validates feature order and matrix shapes at load time, then scores feature vectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Artifact-backed classifier
//!
//! The artifact stores a standardised multinomial logistic regression:
//!
//! ```json
//! {
//!   "feature_names": ["age", "sleep_duration", "..."],
//!   "classes": ["Insomnia", "None", "Sleep Apnea"],
//!   "mean": [ ... ],
//!   "scale": [ ... ],
//!   "coefficients": [[ ... ], [ ... ], [ ... ]],
//!   "intercepts": [ ... ]
//! }
//! ```
//!
//! `mean` and `scale` are optional (identity standardisation when absent).
//! Every shape mismatch is a configuration error raised by [`SoftmaxClassifier::load`],
//! so a loaded classifier can always score a nine-feature vector.

use super::Classifier;
use crate::errors::{AppError, AppResult};
use crate::models::{FeatureVector, MetricField};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// On-disk form of the model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelArtifact {
    /// Feature names in training order
    pub feature_names: Vec<String>,
    /// Class labels
    pub classes: Vec<String>,
    /// Per-feature standardisation offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<Vec<f64>>,
    /// Per-feature standardisation divisor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec<f64>>,
    /// One weight row per class
    pub coefficients: Vec<Vec<f64>>,
    /// One bias per class
    pub intercepts: Vec<f64>,
}

impl ModelArtifact {
    fn validate(&self) -> AppResult<()> {
        let expected: Vec<&str> = MetricField::ALL.iter().map(|field| field.key()).collect();
        if self.feature_names.len() != expected.len() {
            return Err(AppError::config_invalid(format!(
                "model declares {} features, expected {}",
                self.feature_names.len(),
                expected.len()
            )));
        }
        if let Some((position, (found, wanted))) = self
            .feature_names
            .iter()
            .zip(&expected)
            .enumerate()
            .find(|(_, (found, wanted))| found.as_str() != **wanted)
        {
            return Err(AppError::config_invalid(format!(
                "feature {position} is '{found}', expected '{wanted}'"
            )));
        }

        if self.classes.is_empty() {
            return Err(AppError::config_invalid("model declares no classes"));
        }
        if self.coefficients.len() != self.classes.len()
            || self.intercepts.len() != self.classes.len()
        {
            return Err(AppError::config_invalid(format!(
                "{} classes but {} coefficient rows and {} intercepts",
                self.classes.len(),
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        if self
            .coefficients
            .iter()
            .any(|row| row.len() != MetricField::COUNT)
        {
            return Err(AppError::config_invalid(
                "coefficient row length does not match feature count",
            ));
        }

        for (name, vector) in [("mean", &self.mean), ("scale", &self.scale)] {
            if vector
                .as_ref()
                .is_some_and(|values| values.len() != MetricField::COUNT)
            {
                return Err(AppError::config_invalid(format!(
                    "{name} length does not match feature count"
                )));
            }
        }
        if self
            .scale
            .as_ref()
            .is_some_and(|values| values.iter().any(|&value| value == 0.0))
        {
            return Err(AppError::config_invalid("scale contains zero"));
        }

        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .chain(self.mean.iter().flatten())
            .chain(self.scale.iter().flatten())
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(AppError::config_invalid("model contains non-finite values"));
        }
        Ok(())
    }
}

/// Multinomial logistic regression over standardised features
#[derive(Debug, Clone)]
pub struct SoftmaxClassifier {
    artifact: ModelArtifact,
}

impl SoftmaxClassifier {
    /// Wrap an in-memory artifact
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when feature names, class count, or matrix
    /// shapes do not line up
    pub fn from_artifact(artifact: ModelArtifact) -> AppResult<Self> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    /// Parse an artifact from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the text is not a valid artifact
    pub fn from_json(json: &str) -> AppResult<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json).map_err(|e| {
            AppError::config_invalid(format!("model artifact is not valid JSON: {e}"))
                .with_source(e)
        })?;
        Self::from_artifact(artifact)
    }

    /// Load the artifact at `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the file does not exist and
    /// `ConfigInvalid` when it cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::config_missing(format!("model artifact {} not found", path.display()))
            } else {
                AppError::config_invalid(format!(
                    "model artifact {} could not be read",
                    path.display()
                ))
                .with_source(e)
            }
        })?;
        let classifier = Self::from_json(&json).map_err(|mut e| {
            e.message = format!("{}: {}", path.display(), e.message);
            e
        })?;
        info!(
            path = %path.display(),
            features = classifier.feature_count(),
            classes = classifier.artifact.classes.len(),
            "Loaded classifier artifact"
        );
        Ok(classifier)
    }

    fn standardise(&self, features: &FeatureVector) -> Vec<f64> {
        features
            .as_slice()
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let mean = self.artifact.mean.as_ref().map_or(0.0, |m| m[index]);
                let scale = self.artifact.scale.as_ref().map_or(1.0, |s| s[index]);
                (value - mean) / scale
            })
            .collect()
    }
}

impl Classifier for SoftmaxClassifier {
    fn classes(&self) -> &[String] {
        &self.artifact.classes
    }

    fn feature_count(&self) -> usize {
        self.artifact.feature_names.len()
    }

    fn predict(&self, features: &FeatureVector) -> AppResult<String> {
        let probabilities = self.predict_proba(features)?;
        let best = probabilities
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (index, &p)| match best {
                Some((_, top)) if p <= top => best,
                _ => Some((index, p)),
            })
            .map(|(index, _)| index)
            .ok_or_else(|| AppError::prediction("model produced no probabilities"))?;
        Ok(self.artifact.classes[best].clone())
    }

    fn predict_proba(&self, features: &FeatureVector) -> AppResult<Vec<f64>> {
        let standardised = self.standardise(features);
        let logits: Vec<f64> = self
            .artifact
            .coefficients
            .iter()
            .zip(&self.artifact.intercepts)
            .map(|(row, bias)| {
                bias + row
                    .iter()
                    .zip(&standardised)
                    .map(|(weight, x)| weight * x)
                    .sum::<f64>()
            })
            .collect();

        let top = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = logits.iter().map(|logit| (logit - top).exp()).collect();
        let total: f64 = exps.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(AppError::prediction("softmax normalisation failed"));
        }
        Ok(exps.into_iter().map(|value| value / total).collect())
    }
}
