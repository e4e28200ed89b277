//! # client
//!
//! Leptos frontend for the Stompilot marketing site: routing, pages,
//! navbar, the persisted light/dark theme store, and static translation
//! lookup. Built with `ssr` for the Axum server and `hydrate` for WASM.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
