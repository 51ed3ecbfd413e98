//! Input schema handler

use axum::Json;

use maintenance_core::logic::input::{input_schema, InputControl};

/// Sidebar controls: ranges, steps and defaults
pub async fn schema() -> Json<Vec<InputControl>> {
    Json(input_schema())
}
