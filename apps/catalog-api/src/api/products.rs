//! Products API routes

use axum::Router;
use domain_products::{handlers, ProductService};

use crate::state::AppState;

/// Create products router over the shared store
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.products.clone());
    handlers::router(service, state.config.api_key.clone())
}
