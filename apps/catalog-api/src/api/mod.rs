//! API routes module

pub mod products;

use axum::{routing::get, Router};
use axum_helpers::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes, mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Top-level routes: greeting and liveness
pub fn root(state: &AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .merge(health_router(state.config.app))
}

/// The complete application router
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state), root(state))
}

async fn hello() -> &'static str {
    "Hello World!"
}
