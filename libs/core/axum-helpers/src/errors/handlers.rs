use axum::response::{IntoResponse, Response};

use super::AppError;

/// Message for a path that exists but not for the request method.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound("Route not found".to_string()).into_response()
}

/// Fallback handler for a known path called with an unsupported method.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed(METHOD_NOT_ALLOWED_MESSAGE.to_string()).into_response()
}
