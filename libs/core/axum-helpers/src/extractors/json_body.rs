//! JSON body extractor that reports malformed bodies as validation errors.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is an [`AppError`].
///
/// Axum's own `Json` answers a body that does not deserialize with a bare
/// 422 text response. This wrapper turns every rejection into a 400
/// `ValidationError` body so clients always see the uniform error shape.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<CreateThing>) -> String {
///     format!("Creating {}", payload.name)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
