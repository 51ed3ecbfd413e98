//! Logic Module - Business Logic & Engines
//!
//! Chứa các bước xử lý: Collector, Transformer, Inference, Selector.
//!
//! ## Architecture
//! - `input/` - Input collection and bounds checks
//! - `features/` - Feature engineering and model column order
//! - `model/` - Classifier seam (ONNX), prediction contract, decision
//! - `dataset/` - Labeled history for comparisons
//! - `view/` - Comparative display selector
//! - `pipeline` - Wires the steps into one evaluation

pub mod input;
pub mod features;
pub mod model;
pub mod dataset;
pub mod view;

pub mod pipeline;
pub mod about;
