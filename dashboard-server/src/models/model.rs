//! Loaded artifact summary

use serde::Serialize;

use maintenance_core::logic::model::ModelInfo;
use maintenance_core::Engine;

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub source: String,
    pub rows: usize,
    pub no_failure: usize,
    pub failure: usize,
}

#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub model: ModelInfo,
    pub dataset: DatasetSummary,
}

impl ModelSummary {
    pub fn from_engine(engine: &Engine) -> Self {
        let dataset = engine.dataset();
        let [no_failure, failure] = dataset.label_counts();

        Self {
            model: engine.model_info(),
            dataset: DatasetSummary {
                source: dataset.source().to_string(),
                rows: dataset.len(),
                no_failure,
                failure,
            },
        }
    }
}
