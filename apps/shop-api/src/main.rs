use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use shop_api::config::Config;
use shop_api::state::{AppState, connect_store};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = connect_store(config.mongodb.as_ref(), None).await;
    let state = AppState { config, store };

    let app = shop_api::build_router(&state)?;
    let AppState { config, store } = state;

    info!(
        name = config.app.name,
        version = config.app.version,
        database = store.is_configured(),
        "Starting Shop Lite API with graceful shutdown (30s timeout)"
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: releasing document store");
        // The driver closes pooled connections on drop
        drop(store);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop Lite API shutdown complete");
    Ok(())
}
