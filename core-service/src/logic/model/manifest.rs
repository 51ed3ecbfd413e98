//! Model Manifest - sidecar describing how to talk to the artifact
//!
//! ```json
//! {
//!   "feature_order": ["Tool wear", "Power", "temp_diff", "Type_H", "Type_L", "Type_M"],
//!   "input_name": "float_input",
//!   "label_output": "output_label",
//!   "probability_output": "output_probability"
//! }
//! ```
//!
//! Every key is optional. Without a manifest the default feature order is used
//! and the graph is bound by position (input 0; output 0 = label,
//! output 1 = probabilities).

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::inference::ModelError;
use crate::logic::features::FeatureLayout;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelManifest {
    pub feature_order: Option<Vec<String>>,
    pub input_name: Option<String>,
    pub label_output: Option<String>,
    pub probability_output: Option<String>,
}

impl ModelManifest {
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Manifest(format!("{}: {}", path.display(), e)))?;

        let manifest: Self = serde_json::from_str(&content)
            .map_err(|e| ModelError::Manifest(format!("{}: {}", path.display(), e)))?;

        // Fail on a bad order now rather than on first prediction
        manifest.layout()?;

        log::info!("Model manifest loaded from: {}", path.display());
        Ok(manifest)
    }

    pub fn layout(&self) -> Result<FeatureLayout, ModelError> {
        match &self.feature_order {
            Some(names) => Ok(FeatureLayout::from_names(names)?),
            None => Ok(FeatureLayout::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_manifest(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_manifest_uses_default_layout() {
        let file = write_manifest("{}");
        let manifest = ModelManifest::from_path(file.path()).unwrap();
        assert_eq!(manifest, ModelManifest::default());
        assert_eq!(manifest.layout().unwrap(), FeatureLayout::default());
    }

    #[test]
    fn test_manifest_with_order_and_outputs() {
        let file = write_manifest(
            r#"{
                "feature_order": ["Power", "temp_diff", "Type_H", "Type_L", "Type_M", "Tool wear"],
                "input_name": "float_input",
                "label_output": "output_label",
                "probability_output": "output_probability"
            }"#,
        );
        let manifest = ModelManifest::from_path(file.path()).unwrap();
        assert_eq!(manifest.input_name.as_deref(), Some("float_input"));
        assert_eq!(manifest.label_output.as_deref(), Some("output_label"));
        assert_eq!(manifest.layout().unwrap().names()[0], "Power");
    }

    #[test]
    fn test_input_name_alone_is_accepted() {
        let file = write_manifest(r#"{"input_name": "float_input"}"#);
        let manifest = ModelManifest::from_path(file.path()).unwrap();
        assert_eq!(manifest.input_name.as_deref(), Some("float_input"));
        assert_eq!(manifest.feature_order, None);
        assert_eq!(manifest.layout().unwrap(), FeatureLayout::default());
    }

    #[test]
    fn test_manifest_with_raw_column_is_rejected() {
        let file = write_manifest(
            r#"{"feature_order": ["Torque", "temp_diff", "Type_H", "Type_L", "Type_M", "Tool wear"]}"#,
        );
        assert!(matches!(
            ModelManifest::from_path(file.path()),
            Err(ModelError::Layout(_))
        ));
    }

    #[test]
    fn test_malformed_manifest_is_rejected() {
        let file = write_manifest("{ not json");
        assert!(matches!(
            ModelManifest::from_path(file.path()),
            Err(ModelError::Manifest(_))
        ));

        let file = write_manifest(r#"{"threshold": 0.5}"#);
        assert!(matches!(
            ModelManifest::from_path(file.path()),
            Err(ModelError::Manifest(_))
        ));
    }
}
