use super::api_key::{API_KEY_HEADER, ApiKeyAuth};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// API key authentication middleware.
///
/// Rejects the request with a 401 `AuthError` body before any handler
/// extractor (including the JSON body) runs.
///
/// # Example
///
/// ```ignore
/// let protected = Router::new()
///     .route("/api/things/{id}", delete(delete_thing))
///     .route_layer(axum::middleware::from_fn_with_state(auth.clone(), require_api_key));
/// ```
pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(err) = auth.authenticate(provided) {
        tracing::debug!(
            header_present = provided.is_some(),
            "Rejected request without a valid API key"
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}
