//! Evaluation request/response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maintenance_core::logic::input::RawInput;
use maintenance_core::logic::view::FieldName;
use maintenance_core::Evaluation;

/// Body of `POST /api/v1/compare`
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub input: RawInput,
    pub field: FieldName,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

impl From<Evaluation> for EvaluationResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            evaluation,
        }
    }
}
