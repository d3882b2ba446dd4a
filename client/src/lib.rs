#![recursion_limit = "512"]

//! Browser admin UI for the school backend (Leptos SSR + hydration).
//!
//! SYSTEM CONTEXT
//! ==============
//! The `ssr` build renders the shell and routes inside the host binary; the
//! `hydrate` build runs in the browser and talks to the REST API directly
//! through `workflow`, with the session kept in `localStorage`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: take over the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
