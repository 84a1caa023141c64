use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::REQUIRED_FIELDS;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = %id, "Product lookup missed");
                AppError::NotFound("Product not found".to_string())
            }
            ProductError::Validation(msg) => AppError::Validation(msg),
            ProductError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Collapses field errors into one message; missing fields win over a bad price.
impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let messages = field_errors
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_deref());

        let message = messages
            .clone()
            .find(|m| *m == REQUIRED_FIELDS)
            .or_else(|| messages.clone().next())
            .unwrap_or(REQUIRED_FIELDS);

        ProductError::Validation(message.to_string())
    }
}
