//! Binary entrypoint for the movies HTTP server.
//!
//! Configuration comes from flags or environment variables, see
//! [`ServerConfig`]:
//! - `MOVIES_DB_PATH`: SQLite database file path (default: "movies.db")
//! - `MOVIES_HOST`: listen interface (default: "0.0.0.0")
//! - `MOVIES_PORT`: listen port (default: "3000")

use anyhow::Context;
use clap::Parser;

use movies_server::config::ServerConfig;
use movies_server::router::build_router;
use movies_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movies_server::logging::init();
    let config = ServerConfig::parse();

    let state = AppState::new(&config.db_path)
        .context("failed to initialize application state")?;
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("movies server starting on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("movies server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
