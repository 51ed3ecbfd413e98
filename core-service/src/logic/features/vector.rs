//! Feature Vector - Core data structure for ML input
//!
//! Named engineered features. Ordering for the classifier is applied later by
//! `FeatureLayout::arrange`, so nothing here depends on the artifact.

use serde::{Deserialize, Serialize};

use super::layout::{Feature, FEATURE_VERSION};

/// Engineered features for one device reading
///
/// Exactly one of `type_h` / `type_l` / `type_m` is 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature set version
    pub version: u8,
    /// Watts: 2π · RPM · Torque / 60
    pub power: f64,
    /// Kelvin: process − air
    pub temp_diff: f64,
    pub type_h: u8,
    pub type_l: u8,
    pub type_m: u8,
    /// Minutes
    pub tool_wear: u32,
}

impl FeatureVector {
    /// Get feature by name
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::ToolWear => self.tool_wear as f64,
            Feature::Power => self.power,
            Feature::TempDiff => self.temp_diff,
            Feature::TypeH => self.type_h as f64,
            Feature::TypeL => self.type_l as f64,
            Feature::TypeM => self.type_m as f64,
        }
    }

    /// Check the one-hot invariant
    pub fn is_one_hot(&self) -> bool {
        let flags = [self.type_h, self.type_l, self.type_m];
        flags.iter().all(|&f| f <= 1) && flags.iter().map(|&f| f as u32).sum::<u32>() == 1
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "named_values": Feature::ALL.iter()
                .map(|f| (f.name().to_string(), self.get(*f)))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            version: FEATURE_VERSION,
            power: 0.0,
            temp_diff: 0.0,
            type_h: 1,
            type_l: 0,
            type_m: 0,
            tool_wear: 0,
        }
    }
}
