//! Catalog API - REST server for the product catalog

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::InMemoryProductRepository;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if !config.api_key.is_configured() {
        warn!("API_KEY is not set; create, update and delete requests will be rejected");
    }

    let state = AppState {
        config: config.clone(),
        products: InMemoryProductRepository::with_seed_data(),
    };

    let app = api::app(&state);

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
