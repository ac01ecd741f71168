//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered Leptos app, its compiled
//! `/pkg` assets, and a liveness probe. The profile REST API is a separate
//! service; the browser talks to it directly.

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

/// Routes that do not depend on the Leptos build output.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: SSR pages, static assets, probe, request tracing.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(profile_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || profile_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
