//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the Leptos SSR pages, the compiled client bundle
//! under `/pkg`, and a health probe. Unknown paths fall back to the app,
//! which renders its not-found view with a 404. The edge gate wraps the page routes only,
//! so assets and `/healthz` never redirect.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::gate;
use crate::ServeError;

/// Wrap page routes with the edge gate.
pub fn gated(pages: Router) -> Router {
    pages.layer(middleware::from_fn(gate::edge_gate))
}

/// Routes that bypass the gate.
pub fn service_routes(site_root: PathBuf) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
}

/// Full application router.
///
/// # Errors
///
/// Returns [`ServeError::Leptos`] if the Leptos configuration cannot be loaded
/// (missing or malformed `[[workspace.metadata.leptos]]`).
pub fn app(config: &ServerConfig) -> Result<Router, ServeError> {
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portfolio_client::app::App);

    let pages = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(portfolio_client::app::shell))
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::debug!(site_root = %site_root.display(), "serving static assets");

    Ok(gated(pages)
        .merge(service_routes(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
