//! # profile-client
//!
//! Leptos + WASM frontend for ProfileApp: signup, login, profile viewing and
//! profile editing against a remote REST API.
//!
//! This crate contains pages, components, the authenticated session state,
//! the bearer-token API client, and the route table. The `hydrate` feature
//! builds the browser bundle; the `ssr` feature is used by the Axum host.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
