use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::repair::RepairError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every response body is `{"detail": "..."}`. Server-side variants log their
/// cause and hand the caller a generic message only. Anything that escapes
/// as a panic is answered by the router's catch-panic layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM returned empty content")]
    UpstreamEmpty,

    #[error("Malformed model output: {0}")]
    UpstreamMalformed(#[from] RepairError),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::EmptyContent => AppError::UpstreamEmpty,
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UpstreamEmpty => {
                tracing::error!("LLM returned an empty response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI service returned empty response".to_string(),
                )
            }
            AppError::UpstreamMalformed(e) => {
                tracing::error!("Invalid JSON from AI: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Contract analysis failed. Please try again.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("AI analysis failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Contract analysis failed. Please try again.".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = AppError::Validation("bad".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_content_maps_to_upstream_empty() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::UpstreamEmpty));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_maps_to_llm() {
        let err: AppError = LlmError::Api {
            status: 403,
            message: "API key not valid".into(),
        }
        .into();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("403")));
    }

    #[test]
    fn test_missing_field_maps_to_500() {
        let err: AppError = RepairError::MissingField("clauses").into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
