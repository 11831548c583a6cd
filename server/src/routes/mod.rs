//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and success pages are server-rendered by Leptos and hydrated
//! in the browser. Compiled WASM/CSS lives under `/pkg`; everything else
//! (logo, favicon) falls through to a plain static directory. There is no
//! auth API: credentials never leave the browser.


use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Health check plus the static-file fallback.
fn base_routes(static_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(static_dir))
}

/// Full application router: Leptos SSR pages, `/pkg` assets, static files.
pub fn app(leptos_options: LeptosOptions, static_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(base_routes(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
