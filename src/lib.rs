//! # dashboard-client
//!
//! Leptos + WASM page-behavior layer for the dashboard: light/dark theme
//! handling, sidebar identity sync against the auth profile endpoint, and the
//! sign-in / sign-up forms.
//!
//! Browser bindings (`localStorage`, `matchMedia`, `fetch`) live behind the
//! `hydrate` feature. Everything else runs natively so the logic layer can be
//! tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("dashboard client hydrating");
    leptos::mount::hydrate_body(app::App);
}
