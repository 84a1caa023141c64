//! Application state management

use domain_products::InMemoryProductRepository;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: crate::config::Config,
    pub products: InMemoryProductRepository,
}
