//! Request extractors

use axum::extract::FromRequest;

use crate::AppError;

/// `Json` whose rejection renders as an `AppError` body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
