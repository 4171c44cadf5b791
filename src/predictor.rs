// ABOUTME: One prediction cycle around a classifier loaded once at start
// ABOUTME: Classifies a health record and evaluates risks and suggestions atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::classifier::{classify, Classifier, SoftmaxClassifier};
use crate::config::PredictorConfig;
use crate::errors::AppResult;
use crate::intelligence::{evaluate, EvaluationResult};
use crate::models::HealthMetrics;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs classify → evaluate for each interaction
///
/// Holds only the shared, read-only classifier; nothing carries over from one
/// call to the next.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("classes", &self.classifier.classes())
            .field("feature_count", &self.classifier.feature_count())
            .finish()
    }
}

impl Predictor {
    /// Wrap an already loaded classifier
    #[must_use]
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Load the classifier artifact named by `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the artifact is missing or invalid
    pub fn load(config: &PredictorConfig) -> AppResult<Self> {
        let classifier = SoftmaxClassifier::load(&config.model_path)?;
        Ok(Self::new(Arc::new(classifier)))
    }

    /// The shared classifier
    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// Evaluate one record
    ///
    /// # Errors
    ///
    /// Returns `PredictionFailed` when the classifier call fails or breaks its
    /// contract; no partial result is produced
    pub fn predict(&self, metrics: &HealthMetrics) -> AppResult<EvaluationResult> {
        let result = classify(self.classifier.as_ref(), metrics)
            .and_then(|output| evaluate(metrics, &output));
        match &result {
            Ok(evaluation) => info!(
                label = %evaluation.prediction.label,
                confidence = evaluation.prediction.confidence_percent,
                worst_risk = ?evaluation.risks.worst_severity(),
                "Prediction completed"
            ),
            Err(e) => warn!(code = ?e.code, error = %e, "Prediction failed"),
        }
        result
    }
}
