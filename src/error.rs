// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::translator::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Both message and lang are required.")]
    MissingFields,

    #[error("Translation failed.")]
    Translation(#[from] ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::Translation(err) => {
                // Full detail stays server-side; the caller only sees the
                // fixed message.
                tracing::error!(error = %err, "translation request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
