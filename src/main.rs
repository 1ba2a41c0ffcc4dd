use std::sync::Arc;

use mediguide_backend::{config::Config, routes, state::AppState};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mediguide_backend=debug")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(?config, "loaded configuration");

    let state = Arc::new(AppState::from_config(&config));

    let app = routes::create_router(&config.index_path)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!(addr = %listener.local_addr()?, "MediGuide running");
    axum::serve(listener, app).await?;
    Ok(())
}
