//! Shared-secret API key authentication.
//!
//! Mutating routes are wrapped with [`require_api_key`], which compares the
//! `x-api-key` request header against the secret loaded at startup.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyAuth, require_api_key};
//! use core_config::FromEnv;
//!
//! let auth = ApiKeyAuth::from_env()?;
//!
//! let protected = Router::new()
//!     .route("/things", post(create_thing))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, require_api_key));
//! ```

pub mod api_key;
pub mod middleware;

pub use api_key::{API_KEY_HEADER, ApiKeyAuth, INVALID_API_KEY};
pub use middleware::require_api_key;
