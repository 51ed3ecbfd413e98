//! Static and startup-time metadata

use axum::{extract::State, Json};

use maintenance_core::logic::view::{FieldSpec, FIELD_TABLE};
use maintenance_core::{about as project_about, AboutInfo};

use crate::models::ModelSummary;
use crate::AppState;

/// Comparable fields and how each is charted
pub async fn fields() -> Json<&'static [FieldSpec]> {
    Json(&FIELD_TABLE[..])
}

/// Loaded artifact and reference dataset
pub async fn model(State(state): State<AppState>) -> Json<ModelSummary> {
    Json(ModelSummary::from_engine(&state.engine))
}

pub async fn about() -> Json<AboutInfo> {
    Json(project_about())
}
