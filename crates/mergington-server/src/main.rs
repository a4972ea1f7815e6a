//! Binary entrypoint for the Mergington activities server.
//!
//! See [`ServerConfig`] for the flags and environment variables it reads.
//! Log verbosity follows `RUST_LOG` (default: "info").

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mergington_server::config::ServerConfig;
use mergington_server::router::build_router;
use mergington_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let state = AppState::from_config(&config).inspect_err(|err| {
        tracing::error!("failed to initialize application state: {}", err);
    })?;
    tracing::info!(
        "catalog ready: {} activities, capacity policy {}",
        state.catalog.len(),
        state.catalog.capacity_policy()
    );

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("mergington server starting on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
}
