//! # portfolio-server
//!
//! Serves the portfolio site: server-side renders the Leptos app, gates the
//! dashboard on the session cookie, and hosts the compiled client bundle.

mod config;
mod gate;
mod routes;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

const DEFAULT_LOG_FILTER: &str = "info,portfolio_server=debug";

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServeError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
