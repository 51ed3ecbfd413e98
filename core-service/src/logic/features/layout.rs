//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The classifier artifact was fit on a fixed column order. That order is an
//! external contract: it is configured (default below, or the model manifest),
//! never inferred from the data.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Rename feature → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use super::vector::FeatureVector;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature set version
/// MUST be incremented when the feature set changes
pub const FEATURE_VERSION: u8 = 1;

/// Total number of features passed to the classifier
pub const FEATURE_COUNT: usize = 6;

// ============================================================================
// FEATURES
// ============================================================================

/// Engineered features, named by the column the artifact was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "Tool wear")]
    ToolWear,
    #[serde(rename = "Power")]
    Power,
    #[serde(rename = "temp_diff")]
    TempDiff,
    #[serde(rename = "Type_H")]
    TypeH,
    #[serde(rename = "Type_L")]
    TypeL,
    #[serde(rename = "Type_M")]
    TypeM,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::ToolWear,
        Feature::Power,
        Feature::TempDiff,
        Feature::TypeH,
        Feature::TypeL,
        Feature::TypeM,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ToolWear => "Tool wear",
            Self::Power => "Power",
            Self::TempDiff => "temp_diff",
            Self::TypeH => "Type_H",
            Self::TypeL => "Type_L",
            Self::TypeM => "Type_M",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Column order the training pipeline produced after dropping raw columns
pub const DEFAULT_FEATURE_ORDER: [Feature; FEATURE_COUNT] = Feature::ALL;

/// Raw columns consumed by the transform and never passed to the classifier
pub const DROPPED_COLUMNS: &[&str] = &[
    "Type",
    "Air Temperature",
    "Process Temperature",
    "Rotational Speed",
    "Torque",
];

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("feature '{0}' is a raw column dropped by the transform")]
    DroppedColumn(String),

    #[error("unknown feature '{0}'")]
    UnknownFeature(String),

    #[error("feature '{0}' appears more than once")]
    Duplicate(String),

    #[error("expected {expected} features, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// Ordered feature list of one classifier artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLayout {
    order: [Feature; FEATURE_COUNT],
}

impl Default for FeatureLayout {
    fn default() -> Self {
        Self { order: DEFAULT_FEATURE_ORDER }
    }
}

impl FeatureLayout {
    /// Build a layout from column names; must be a permutation of the six features
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, LayoutError> {
        if names.len() != FEATURE_COUNT {
            return Err(LayoutError::WrongCount {
                expected: FEATURE_COUNT,
                actual: names.len(),
            });
        }

        let mut order = DEFAULT_FEATURE_ORDER;
        let mut seen = [false; FEATURE_COUNT];

        for (slot, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let feature = match Feature::from_name(name) {
                Some(feature) => feature,
                None if DROPPED_COLUMNS.iter().any(|c| c.eq_ignore_ascii_case(name)) => {
                    return Err(LayoutError::DroppedColumn(name.to_string()));
                }
                None => return Err(LayoutError::UnknownFeature(name.to_string())),
            };

            let idx = feature as usize;
            if seen[idx] {
                return Err(LayoutError::Duplicate(name.to_string()));
            }
            seen[idx] = true;
            order[slot] = feature;
        }

        Ok(Self { order })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.order.iter().map(Feature::name).collect()
    }

    /// Position of a feature in the classifier row
    pub fn index_of(&self, feature: Feature) -> usize {
        self.order
            .iter()
            .position(|&f| f == feature)
            .unwrap_or_default()
    }

    /// CRC32 of version + ordered names
    /// Used to tag model inputs so a row is never fed to a model with another order
    pub fn hash(&self) -> u32 {
        let mut hasher = Hasher::new();

        hasher.update(&[FEATURE_VERSION]);

        for feature in &self.order {
            hasher.update(feature.name().as_bytes());
            hasher.update(&[0]); // Separator
        }

        hasher.finalize()
    }

    /// Lay a feature vector out in classifier order
    pub fn arrange(&self, vector: &FeatureVector) -> ModelInput {
        let mut values = [0.0f32; FEATURE_COUNT];
        for (slot, feature) in self.order.iter().enumerate() {
            values[slot] = vector.get(*feature) as f32;
        }

        ModelInput {
            layout_hash: self.hash(),
            values,
        }
    }

    pub fn info(&self) -> LayoutInfo {
        LayoutInfo {
            version: FEATURE_VERSION,
            hash: self.hash(),
            feature_count: FEATURE_COUNT,
            feature_names: self.names().into_iter().map(String::from).collect(),
        }
    }
}

// ============================================================================
// MODEL INPUT
// ============================================================================

/// One classifier row (f32, artifact order)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInput {
    pub layout_hash: u32,
    pub values: [f32; FEATURE_COUNT],
}

impl ModelInput {
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

// ============================================================================
// TESTS
// ============================================================================
