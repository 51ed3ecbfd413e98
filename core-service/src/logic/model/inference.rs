//! Inference - classifier seam and prediction contract
//!
//! The classifier is an opaque, externally trained artifact. This module only
//! arranges the feature row, invokes it and checks that what came back is a
//! usable binary prediction. There is no fallback: a broken artifact is an
//! error for the caller, never a made-up answer.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PROBABILITY_SUM_TOLERANCE;
use crate::logic::features::{FeatureLayout, FeatureVector, LayoutError, LayoutInfo, ModelInput};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to load model: {0}")]
    Load(String),

    #[error("invalid model manifest: {0}")]
    Manifest(String),

    #[error("invalid feature order: {0}")]
    Layout(#[from] LayoutError),

    #[error("model is incompatible with the {features}-feature layout: {reason}")]
    Incompatible { features: usize, reason: String },

    #[error("input arranged for layout {actual:08x}, model expects {expected:08x}")]
    LayoutMismatch { expected: u32, actual: u32 },

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("invalid model output: {0}")]
    InvalidOutput(String),

    #[error("invalid feature vector: {0}")]
    InvalidFeatures(String),
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_path: String,
    pub model_type: String,
    pub sha256: Option<String>,
    pub layout: LayoutInfo,
    pub loaded_at: DateTime<Utc>,
}

/// Prediction output
///
/// `probability` is the classifier's confidence in `label`, not P(failure):
/// label 0 carries p0, label 1 carries p1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 0 = no maintenance required, 1 = maintenance needed
    pub label: u8,
    pub probability: f32,
    /// `[p0, p1]` as returned by the classifier
    pub probabilities: [f32; 2],
    pub inference_time_us: u64,
}

impl PredictionResult {
    pub fn needs_maintenance(&self) -> bool {
        self.label == 1
    }
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trait cho classifier artifacts (ONNX, test doubles, ...)
///
/// Implementations are loaded once and shared read-only across evaluations.
pub trait Classifier: Send + Sync {
    /// Feature order the artifact was fit on
    fn layout(&self) -> &FeatureLayout;

    /// Raw class label for one row
    fn predict(&self, input: &ModelInput) -> Result<i64, ModelError>;

    /// `[p0, p1]` for one row
    fn predict_proba(&self, input: &ModelInput) -> Result<[f32; 2], ModelError>;

    /// Label and probabilities together; override when one call yields both
    fn classify(&self, input: &ModelInput) -> Result<(i64, [f32; 2]), ModelError> {
        Ok((self.predict(input)?, self.predict_proba(input)?))
    }

    fn info(&self) -> ModelInfo;
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Run the classifier on one feature vector
pub fn predict(
    classifier: &dyn Classifier,
    vector: &FeatureVector,
) -> Result<PredictionResult, ModelError> {
    let start_time = Instant::now();

    if !vector.is_one_hot() {
        return Err(ModelError::InvalidFeatures(format!(
            "type flags H={} L={} M={} are not one-hot",
            vector.type_h, vector.type_l, vector.type_m
        )));
    }

    let input = classifier.layout().arrange(vector);
    let (raw_label, probabilities) = classifier.classify(&input)?;

    let label = match raw_label {
        0 => 0u8,
        1 => 1u8,
        other => {
            return Err(ModelError::InvalidOutput(format!(
                "label {} is not a binary class",
                other
            )))
        }
    };

    validate_probabilities(&probabilities)?;

    let inference_time = start_time.elapsed().as_micros() as u64;
    log::debug!(
        "Prediction: label={} p0={:.4} p1={:.4} ({}us)",
        label,
        probabilities[0],
        probabilities[1],
        inference_time
    );

    Ok(PredictionResult {
        label,
        probability: probabilities[label as usize],
        probabilities,
        inference_time_us: inference_time,
    })
}

/// `[p0, p1]` must be finite, within [0, 1] and sum to 1
pub fn validate_probabilities(probabilities: &[f32; 2]) -> Result<(), ModelError> {
    if probabilities
        .iter()
        .any(|p| !p.is_finite() || *p < 0.0 || *p > 1.0)
    {
        return Err(ModelError::InvalidOutput(format!(
            "probabilities {:?} outside [0, 1]",
            probabilities
        )));
    }

    let sum = probabilities[0] + probabilities[1];
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(ModelError::InvalidOutput(format!(
            "probabilities {:?} sum to {}",
            probabilities, sum
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
