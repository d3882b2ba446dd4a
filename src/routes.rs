//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos shell and serves the WASM bundle. The
//! browser talks to the school API directly, so there are no API routes here.

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

/// SSR routes for every page, `/pkg` assets and `/healthz`.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
