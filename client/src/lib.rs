//! # client
//!
//! Leptos + WASM frontend for Gatehouse: public pages, sign-in/sign-up and a
//! protected dashboard backed by a hosted identity provider.
//!
//! The session lifecycle itself lives in the `auth` crate; this crate wires it
//! to Leptos signals, the router, toasts, and the provider's HTTP API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
