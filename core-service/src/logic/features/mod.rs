//! Features Module - Feature Engineering
//!
//! Tách logic trích xuất features từ raw input.
//! `transform` builds the named vector, `FeatureLayout` orders it for the model.

pub mod layout;
pub mod vector;
pub mod transform;


// Re-export common types
pub use layout::{
    Feature, FeatureLayout, LayoutError, LayoutInfo, ModelInput, DEFAULT_FEATURE_ORDER,
    DROPPED_COLUMNS, FEATURE_COUNT, FEATURE_VERSION,
};
pub use transform::transform;
pub use vector::FeatureVector;
