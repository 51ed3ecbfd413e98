//! ONNX Classifier - ONNX Runtime Integration
//!
//! Load và chạy ONNX model (binary classifier).
//!
//! Artifact contract:
//! - exactly one input, `f32[1, FEATURE_COUNT]`, columns in layout order,
//!   bound by the manifest's `input_name` or else the graph's first input
//! - a label output (`int64[1]`) and a probability output (`f32[1, 2]`);
//!   scikit-learn exports need the probability map disabled
//!
//! One row is run through the artifact at load time so a shape or output
//! mismatch fails startup instead of the first request.

use std::path::Path;

use chrono::Utc;
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use super::inference::{Classifier, ModelError, ModelInfo};
use super::manifest::ModelManifest;
use crate::logic::features::{FeatureLayout, FeatureVector, ModelInput, FEATURE_COUNT};

pub struct OnnxClassifier {
    /// `Session::run` needs `&mut`; one row at a time is plenty here
    session: Mutex<Session>,
    layout: FeatureLayout,
    input_name: String,
    label_output: String,
    probability_output: String,
    info: ModelInfo,
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("model_path", &self.info.model_path)
            .field("input_name", &self.input_name)
            .field("label_output", &self.label_output)
            .field("probability_output", &self.probability_output)
            .finish()
    }
}

impl OnnxClassifier {
    /// Load ONNX model từ file
    pub fn load(model_path: &Path, manifest: &ModelManifest) -> Result<Self, ModelError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(ModelError::NotFound(model_path.to_path_buf()));
        }

        let model_bytes = std::fs::read(model_path)
            .map_err(|e| ModelError::Load(format!("{}: {}", model_path.display(), e)))?;

        Self::from_bytes(&model_bytes, manifest, &model_path.display().to_string())
    }

    /// Load ONNX model từ bytes
    pub fn from_bytes(
        model_bytes: &[u8],
        manifest: &ModelManifest,
        origin: &str,
    ) -> Result<Self, ModelError> {
        let layout = manifest.layout()?;
        let sha256 = hex::encode(Sha256::digest(model_bytes));

        let session = Session::builder()
            .map_err(|e| ModelError::Load(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load(format!("Optimization error: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| ModelError::Load(format!("Load from memory error: {}", e)))?;

        if session.inputs.len() != 1 {
            return Err(ModelError::Incompatible {
                features: FEATURE_COUNT,
                reason: format!("expected one input, model has {}", session.inputs.len()),
            });
        }

        let inputs: Vec<&str> = session.inputs.iter().map(|i| i.name.as_str()).collect();
        let outputs: Vec<&str> = session.outputs.iter().map(|o| o.name.as_str()).collect();

        let input_name = resolve_name("input", &inputs, manifest.input_name.as_deref(), 0)?;
        let label_output = resolve_name("output", &outputs, manifest.label_output.as_deref(), 0)?;
        let probability_output =
            resolve_name("output", &outputs, manifest.probability_output.as_deref(), 1)?;

        let classifier = Self {
            session: Mutex::new(session),
            info: ModelInfo {
                model_path: origin.to_string(),
                model_type: "onnx".to_string(),
                sha256: Some(sha256),
                layout: layout.info(),
                loaded_at: Utc::now(),
            },
            layout,
            input_name,
            label_output,
            probability_output,
        };

        classifier.check_compatible()?;

        log::info!(
            "ONNX model loaded successfully (sha256 {}, layout {:08x})",
            classifier.info.sha256.as_deref().unwrap_or("-"),
            classifier.layout.hash()
        );

        Ok(classifier)
    }

    /// One throwaway row through the graph to check shape and outputs
    fn check_compatible(&self) -> Result<(), ModelError> {
        let row = self.layout.arrange(&FeatureVector::default());
        self.run(&row).map(|_| ()).map_err(|e| ModelError::Incompatible {
            features: FEATURE_COUNT,
            reason: e.to_string(),
        })
    }

    fn run(&self, input: &ModelInput) -> Result<(i64, [f32; 2]), ModelError> {
        let expected = self.layout.hash();
        if input.layout_hash != expected {
            return Err(ModelError::LayoutMismatch {
                expected,
                actual: input.layout_hash,
            });
        }

        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), input.as_slice().to_vec())
            .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Tensor::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let label_value = outputs.get(&self.label_output).ok_or_else(|| {
            ModelError::InvalidOutput(format!("missing output '{}'", self.label_output))
        })?;
        let labels = label_value
            .try_extract_tensor::<i64>()
            .map_err(|e| ModelError::InvalidOutput(format!("label tensor: {}", e)))?
            .1;
        let label = labels
            .first()
            .copied()
            .ok_or_else(|| ModelError::InvalidOutput("empty label tensor".to_string()))?;

        let proba_value = outputs.get(&self.probability_output).ok_or_else(|| {
            ModelError::InvalidOutput(format!("missing output '{}'", self.probability_output))
        })?;
        let proba = proba_value
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::InvalidOutput(format!("probability tensor: {}", e)))?
            .1;
        if proba.len() != 2 {
            return Err(ModelError::InvalidOutput(format!(
                "expected 2 class probabilities, got {}",
                proba.len()
            )));
        }

        Ok((label, [proba[0], proba[1]]))
    }
}

/// Graph input/output name from the manifest, or by position
fn resolve_name(
    kind: &str,
    available: &[&str],
    configured: Option<&str>,
    position: usize,
) -> Result<String, ModelError> {
    match configured {
        Some(name) if available.contains(&name) => Ok(name.to_string()),
        Some(name) => Err(ModelError::Incompatible {
            features: FEATURE_COUNT,
            reason: format!("model has no {} named '{}'", kind, name),
        }),
        None => available
            .get(position)
            .map(|name| name.to_string())
            .ok_or_else(|| ModelError::Incompatible {
                features: FEATURE_COUNT,
                reason: format!("no {} at position {}, model has {}", kind, position, available.len()),
            }),
    }
}

impl Classifier for OnnxClassifier {
    fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    fn predict(&self, input: &ModelInput) -> Result<i64, ModelError> {
        self.run(input).map(|(label, _)| label)
    }

    fn predict_proba(&self, input: &ModelInput) -> Result<[f32; 2], ModelError> {
        self.run(input).map(|(_, proba)| proba)
    }

    fn classify(&self, input: &ModelInput) -> Result<(i64, [f32; 2]), ModelError> {
        self.run(input)
    }

    fn info(&self) -> ModelInfo {
        self.info.clone()
    }
}
