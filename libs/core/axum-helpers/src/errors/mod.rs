pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use thiserror::Error;
use utoipa::ToSchema;

/// Message sent to clients for every unclassified failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Error classification shared by every API error.
///
/// This is the single table that decides the `name` and HTTP status of an
/// error response. The string form is the `name` field of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum ErrorKind {
    #[strum(to_string = "NotFoundError")]
    NotFound,
    #[strum(to_string = "ValidationError")]
    Validation,
    #[strum(to_string = "AuthError")]
    Auth,
    #[strum(to_string = "MethodNotAllowedError")]
    MethodNotAllowed,
    #[strum(to_string = "InternalServerError")]
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Auth => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Standard error response structure.
///
/// Every non-2xx response carries this body:
///
/// ```json
/// {
///   "error": {
///     "name": "NotFoundError",
///     "message": "Product not found",
///     "statusCode": 404
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Inner payload of [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Error class, e.g. `ValidationError`
    pub name: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, repeated for clients that only see the body
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                name: kind.to_string(),
                message: message.into(),
                status_code: kind.status_code().as_u16(),
            },
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own errors into this type; its
/// `IntoResponse` impl is the only place an error body is rendered.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Auth(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Invalid JSON body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Validation(_) | AppError::JsonRejection(_) => ErrorKind::Validation,
            AppError::Auth(_) => ErrorKind::Auth,
            AppError::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match self {
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg
            }
            AppError::Validation(msg) => {
                tracing::info!("Validation error: {}", msg);
                msg
            }
            AppError::Auth(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                msg
            }
            AppError::MethodNotAllowed(msg) => {
                tracing::info!("Method not allowed: {}", msg);
                msg
            }
            AppError::JsonRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                e.body_text()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal server error: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (kind.status_code(), Json(ErrorResponse::new(kind, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_error_kind_table() {
        assert_eq!(ErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::Auth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ErrorKind::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorKind::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ErrorKind::Auth.as_ref(), "AuthError");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = render(AppError::NotFound("Product not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            ErrorResponse::new(ErrorKind::NotFound, "Product not found")
        );
        assert_eq!(body.error.status_code, 404);
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) = render(AppError::Internal("lock poisoned at store.rs".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.name, "InternalServerError");
        assert_eq!(body.error.message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_body_uses_camel_case_status_code() {
        let value = serde_json::to_value(ErrorResponse::new(ErrorKind::Auth, "nope")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "error": { "name": "AuthError", "message": "nope", "statusCode": 401 }
            })
        );
    }
}
