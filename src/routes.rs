//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos app with SSR under a single Axum router: the two app
//! routes, the compiled WASM/CSS bundle under `/pkg`, and a health probe.
//! The host holds no session state; authentication lives in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::StartupError;

/// Load `[package.metadata.leptos]` options (with `LEPTOS_*` env overrides).
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn load_options() -> Result<LeptosOptions, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Config(e.to_string()))?;
    Ok(conf.leptos_options)
}

/// Leptos SSR frontend plus static assets and health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
