// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::view_service::ViewService;
use crate::domain::motor::MotorRegistry;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::synthetic_source::SyntheticSource;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Motor registry and series source (domain + infrastructure)
    let registry = Arc::new(MotorRegistry::new(config.motors)?);
    tracing::info!("Monitoring {} motors", registry.all().len());
    let source = Arc::new(match config.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {} for synthetic series", seed);
            SyntheticSource::seeded(config.spectrum.clone(), config.thermal, seed)
        }
        None => SyntheticSource::new(config.spectrum.clone(), config.thermal),
    });

    // Create services (application layer)
    let view_service = ViewService::new(
        registry,
        source,
        config.spectrum.bins,
        config.spectrum.preview_bins,
    );

    // Create application state
    let state = Arc::new(AppState {
        view_service,
        compress: config.server.compress,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_address.parse()?;
    tracing::info!("Starting motor-health-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
