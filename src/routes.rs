//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the Leptos SSR app, its compiled `/pkg` assets and a health probe
//! under one Axum router. Every page path is rendered by Leptos; the client
//! router decides which page (or the not-found page) to show.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or malformed `[[workspace.metadata.leptos]]`).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
