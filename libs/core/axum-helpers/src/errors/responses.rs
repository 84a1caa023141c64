//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": {
            "name": "InternalServerError",
            "message": "Internal Server Error",
            "statusCode": 500
        }
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": {
            "name": "ValidationError",
            "message": "Name, price, and category are required",
            "statusCode": 400
        }
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": {
            "name": "NotFoundError",
            "message": "Product not found",
            "statusCode": 404
        }
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - missing or invalid API key",
    content_type = "application/json",
    example = json!({
        "error": {
            "name": "AuthError",
            "message": "Invalid or missing API key",
            "statusCode": 401
        }
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);
