//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the static asset services and `/healthz` together with Leptos SSR
//! rendering of the `recruitjob` app under a single Axum router. Every
//! request renders its own component tree, so form state is never shared.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Health probe plus the `/pkg` (compiled WASM/CSS) and `/assets` services.
pub fn static_routes(site_root: &Path, assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
}

/// Full application router: static routes + Leptos SSR pages.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos options cannot be loaded
/// (normally supplied by `cargo leptos` through `LEPTOS_*` variables).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(recruitjob::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || recruitjob::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(&site_root, &config.assets_dir)
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
