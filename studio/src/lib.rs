//! # showreel-studio
//!
//! Leptos + WASM admin dashboard for the Showreel streaming platform.
//! Thin client over the platform's REST API: pages and components render
//! the UI, `net` talks to the API and the object-storage service, and
//! session handling is delegated to the shared `showreel-session` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the shell served by the platform's edge.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
