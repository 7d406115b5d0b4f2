//! Entry point for the `rubik-gateway` HTTP server.

use std::sync::Arc;

use rubik_gateway::{config::GatewayConfig, routes::create_router};
use rubik_solver::{KociembaCli, SolvePipeline, SolverBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let backend = KociembaCli::new(config.solver.clone());
    if let Err(e) = backend.health_check().await {
        tracing::warn!(error = %e, "solver not available; /solve will fail until it is installed");
    }

    let pipeline = Arc::new(SolvePipeline::with_scramble_length(backend, config.scramble_length));
    let app = create_router(pipeline);

    let addr = config.listen_addr;
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "rubik-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
