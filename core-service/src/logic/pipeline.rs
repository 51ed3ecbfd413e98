//! Evaluation Pipeline
//!
//! Collector → Transformer → Inference → Decision, and the Selector when a
//! comparison field is requested. The artifacts are loaded once into an
//! `Engine` and shared read-only; every evaluation is request-local.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use super::dataset::{DatasetError, ReferenceDataset};
use super::features::{transform, FeatureVector};
use super::input::{collect, InputError, InputLine, RawInput};
use super::model::{
    predict, Classifier, Decision, ModelError, ModelInfo, ModelManifest, OnnxClassifier,
    PredictionResult,
};
use super::view::{select_view, FieldName, ViewSpec};
use crate::constants::{DEFAULT_DATASET_PATH, DEFAULT_MODEL_PATH};

// ============================================================================
// CONFIG / ERRORS
// ============================================================================

/// Artifact locations
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub model_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub dataset_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            manifest_path: None,
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

/// Startup failures; all fatal
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Per-evaluation failures
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Everything one evaluation cycle produces
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub input: RawInput,
    pub summary: Vec<InputLine>,
    pub features: FeatureVector,
    pub prediction: PredictionResult,
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSpec>,
}

/// Read-only handles shared by every evaluation
#[derive(Clone)]
pub struct Engine {
    classifier: Arc<dyn Classifier>,
    dataset: Arc<ReferenceDataset>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("model", &self.classifier.info().model_path)
            .field("dataset_rows", &self.dataset.len())
            .finish()
    }
}

impl Engine {
    pub fn new(classifier: Arc<dyn Classifier>, dataset: Arc<ReferenceDataset>) -> Self {
        Self { classifier, dataset }
    }

    /// Load artifacts from disk. Any failure is fatal; there is no fallback model.
    pub fn load(config: &EngineConfig) -> Result<Self, EngineError> {
        let manifest = match &config.manifest_path {
            Some(path) => ModelManifest::from_path(path)?,
            None => ModelManifest::default(),
        };

        let classifier = OnnxClassifier::load(&config.model_path, &manifest)?;
        let dataset = ReferenceDataset::from_path(&config.dataset_path)?;

        Ok(Self::new(Arc::new(classifier), Arc::new(dataset)))
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    pub fn model_info(&self) -> ModelInfo {
        self.classifier.info()
    }

    /// One full cycle for a raw reading set
    pub fn evaluate(
        &self,
        raw: RawInput,
        field: Option<FieldName>,
    ) -> Result<Evaluation, EvaluateError> {
        let input = collect(raw)?;
        let features = transform(&input);
        log::debug!("Features: {}", features.to_log_entry());
        let prediction = predict(self.classifier.as_ref(), &features)?;
        let decision = Decision::from_prediction(&prediction);
        let view = field.map(|f| select_view(f, prediction.label, &input, &self.dataset));

        log::info!(
            "Evaluation: {} ({})",
            decision.headline,
            decision.probability_text
        );

        Ok(Evaluation {
            summary: input.summary(),
            input,
            features,
            prediction,
            decision,
            view,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
