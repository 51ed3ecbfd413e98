//! Model Module - Inference & Decision
//!
//! Tách logic inference khỏi feature engineering.
//! Dễ dàng swap artifact (ONNX, test double) qua trait `Classifier`.

pub mod inference;
pub mod manifest;
pub mod onnx;
pub mod decision;

// Re-export common types
pub use inference::{predict, Classifier, ModelError, ModelInfo, PredictionResult};
pub use manifest::ModelManifest;
pub use onnx::OnnxClassifier;
pub use decision::{format_percent, Decision, DecisionLevel};
