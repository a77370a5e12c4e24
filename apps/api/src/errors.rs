use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Internal faults (exhausted pool, short clue assembly, LLM failures) log the
/// detail and answer with a generic body; the client only ever sees a
/// try-again message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Player data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Selection pool exhausted: {0}")]
    PoolExhausted(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI features are not configured")]
    AiUnavailable,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::AiUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_UNAVAILABLE",
                "AI features are not configured".to_string(),
            ),
            AppError::DataUnavailable(e) => {
                tracing::error!("Player data unavailable: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_UNAVAILABLE",
                    "Today's challenge could not be loaded. Please try again.".to_string(),
                )
            }
            AppError::PoolExhausted(e) => {
                tracing::error!("Selection pool exhausted: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "POOL_EXHAUSTED",
                    "Today's challenge could not be loaded. Please try again.".to_string(),
                )
            }
            AppError::InsufficientData(e) => {
                tracing::error!("Insufficient clue data: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INSUFFICIENT_DATA",
                    "Today's challenge could not be loaded. Please try again.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
