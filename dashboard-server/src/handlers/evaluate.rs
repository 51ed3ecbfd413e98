//! Prediction handlers

use axum::{extract::State, Json};

use maintenance_core::logic::input::RawInput;
use maintenance_core::logic::view::FieldName;

use crate::extract::AppJson;
use crate::models::{CompareRequest, EvaluationResponse};
use crate::{AppResult, AppState};

/// Run one evaluation on the blocking pool; inference is CPU-bound
async fn run(
    state: AppState,
    input: RawInput,
    field: Option<FieldName>,
) -> AppResult<Json<EvaluationResponse>> {
    let engine = state.engine.clone();
    let evaluation = tokio::task::spawn_blocking(move || engine.evaluate(input, field)).await??;

    let response = EvaluationResponse::from(evaluation);
    tracing::debug!(
        id = %response.id,
        label = response.evaluation.prediction.label,
        "Evaluation complete"
    );

    Ok(Json(response))
}

/// Prediction tab: decision and probability
pub async fn predict(
    State(state): State<AppState>,
    AppJson(input): AppJson<RawInput>,
) -> AppResult<Json<EvaluationResponse>> {
    run(state, input, None).await
}

/// Explanation tab: decision plus comparison view for one field
pub async fn compare(
    State(state): State<AppState>,
    AppJson(req): AppJson<CompareRequest>,
) -> AppResult<Json<EvaluationResponse>> {
    run(state, req.input, Some(req.field)).await
}
