//! # portfolio-client
//!
//! Leptos frontend for the portfolio site: public pages rendered from the
//! remote content API, plus the authenticated dashboard for managing blog
//! posts and projects.
//!
//! The crate is compiled twice. With `hydrate` it becomes the WASM bundle
//! that runs in the browser; with `ssr` it is linked into `portfolio-server`
//! which renders the same routes on the server.

pub mod app;
pub mod auth;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
