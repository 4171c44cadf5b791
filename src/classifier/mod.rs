// ABOUTME: Capability trait for the external sleep disorder classifier
// ABOUTME: Runs predict plus predict-probability and checks the output contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classifier seam
//!
//! The evaluator never depends on a concrete model. Anything able to map a
//! [`FeatureVector`] to a label and a probability per class implements
//! [`Classifier`]; [`SoftmaxClassifier`] is the artifact-backed implementation
//! shipped with the binary.

/// JSON softmax-regression artifact
pub mod softmax;

pub use softmax::{ModelArtifact, SoftmaxClassifier};

use crate::errors::{AppError, AppResult};
use crate::models::{ClassifierOutput, FeatureVector, HealthMetrics};
use tracing::{debug, warn};

/// A trained classifier, loaded once and shared read-only
pub trait Classifier: Send + Sync {
    /// Class labels in the order `predict_proba` reports them
    fn classes(&self) -> &[String];

    /// Number of features the model was trained on
    fn feature_count(&self) -> usize;

    /// Predict a single label
    ///
    /// # Errors
    ///
    /// Returns `PredictionFailed` when the model cannot score the input
    fn predict(&self, features: &FeatureVector) -> AppResult<String>;

    /// Probability for every class in [`Classifier::classes`] order
    ///
    /// # Errors
    ///
    /// Returns `PredictionFailed` when the model cannot score the input
    fn predict_proba(&self, features: &FeatureVector) -> AppResult<Vec<f64>>;
}

/// Run both classifier calls for one record and pair the results
///
/// # Errors
///
/// Returns `PredictionFailed` when the feature shape does not match the model,
/// when either call fails, or when the distribution breaks the contract
pub fn classify(classifier: &dyn Classifier, metrics: &HealthMetrics) -> AppResult<ClassifierOutput> {
    let features = metrics.feature_vector();
    if classifier.feature_count() != features.len() {
        return Err(AppError::prediction(format!(
            "model expects {} features, record has {}",
            classifier.feature_count(),
            features.len()
        )));
    }

    let label = classifier.predict(&features)?;
    let probabilities = classifier.predict_proba(&features)?;
    let output = ClassifierOutput::from_parallel(label, classifier.classes(), &probabilities)?;

    if let Err(e) = output.validate() {
        warn!(error = %e, "Classifier output rejected");
        return Err(e);
    }

    debug!(
        label = output.label(),
        classes = classifier.classes().len(),
        "Classifier invoked"
    );
    Ok(output)
}
