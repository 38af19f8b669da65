use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("File too large: uploads are limited to {limit} bytes")]
    FileTooLarge { limit: usize },

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Upload failures are terminal for the request but the client may try another file.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::UnsupportedFile(_) | AppError::FileTooLarge { .. } | AppError::Extraction(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFile(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FILE",
                msg.clone(),
            ),
            AppError::FileTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "FILE_TOO_LARGE",
                self.to_string(),
            ),
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    msg.clone(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
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
                "message": message,
                "retryable": self.is_retryable()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_errors_are_retryable() {
        assert!(AppError::UnsupportedFile("x.exe".into()).is_retryable());
        assert!(AppError::FileTooLarge { limit: 5 }.is_retryable());
        assert!(AppError::Extraction("empty".into()).is_retryable());
        assert!(!AppError::Validation("bad".into()).is_retryable());
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (AppError::UnsupportedFile("u".into()), StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (AppError::FileTooLarge { limit: 1 }, StatusCode::PAYLOAD_TOO_LARGE),
            (AppError::Extraction("e".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::NotFound("n".into()), StatusCode::NOT_FOUND),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_file_too_large_message_names_limit() {
        let msg = AppError::FileTooLarge { limit: 5_242_880 }.to_string();
        assert!(msg.contains("5242880"), "{msg}");
    }
}
