use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream returned a non-200. The status code is passed through to the
    /// caller; `detail` is an excerpt of the upstream body, never the full text.
    #[error("Provider error (status {status}): {detail}")]
    Provider { status: u16, detail: String },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, detail } => AppError::Provider { status, detail },
            LlmError::Timeout => AppError::Timeout,
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Provider { status, detail } => {
                tracing::error!("Provider error {status}: {detail}");
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    format!("Groq API Error: {detail}"),
                )
            }
            AppError::Timeout => {
                tracing::error!("Upstream request timed out");
                (StatusCode::GATEWAY_TIMEOUT, "Request timeout".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = AppError::Validation("Groq API key is required".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_error_passes_upstream_status_through() {
        let resp = AppError::Provider {
            status: 503,
            detail: "over capacity".to_string(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_timeout_maps_to_504_not_500() {
        let resp = AppError::Timeout.into_response();
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let resp = AppError::Internal("decode failure".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_llm_timeout_converts_to_timeout_not_internal() {
        let err = AppError::from(LlmError::Timeout);
        assert!(matches!(err, AppError::Timeout));
    }

    #[test]
    fn test_llm_api_error_converts_to_provider() {
        let err = AppError::from(LlmError::Api {
            status: 429,
            detail: "rate limited".to_string(),
        });
        match err {
            AppError::Provider { status, detail } => {
                assert_eq!(status, 429);
                assert_eq!(detail, "rate limited");
            }
            other => panic!("expected Provider, got {other:?}"),
        }
    }
}
