//! # models360-client
//!
//! Leptos + WASM front-end for the 360models 3D-model management platform.
//!
//! This crate contains pages, components, application state, the HTTP API
//! layer, and the authorization/routing-guard core: bearer-token lifecycle,
//! role-based access decisions, and redirect logic over a guarded route
//! tree.

pub mod app;
pub mod components;
pub mod config;
pub mod guards;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
