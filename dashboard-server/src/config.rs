//! Configuration module

use std::env;
use std::path::PathBuf;

use maintenance_core::constants::{DEFAULT_DATASET_PATH, DEFAULT_MODEL_PATH};
use maintenance_core::EngineConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Classifier artifact (ONNX)
    pub model_path: PathBuf,

    /// Optional JSON sidecar with the artifact's feature order
    pub manifest_path: Option<PathBuf>,

    /// Labeled history used by the comparison views
    pub dataset_path: PathBuf,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),

            manifest_path: env::var("MODEL_MANIFEST_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            dataset_path: env::var("DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH)),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            model_path: self.model_path.clone(),
            manifest_path: self.manifest_path.clone(),
            dataset_path: self.dataset_path.clone(),
        }
    }
}
