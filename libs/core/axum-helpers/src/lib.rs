//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: shared-secret API key gate for mutating routes
//! - **[`server`]**: router assembly, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`errors`]**: the error taxonomy and the uniform JSON error body
//! - **[`extractors`]**: JSON body extractor with uniform rejections
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = create_router::<ApiDoc>(Router::new(), Router::new());
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{API_KEY_HEADER, ApiKeyAuth, require_api_key};
pub use errors::{AppError, ErrorBody, ErrorKind, ErrorResponse};
pub use extractors::JsonBody;
pub use http::security_headers;
pub use server::{create_app, create_router, health_router, shutdown_signal};
