//! # client
//!
//! Leptos + WASM front end for the LexDesk case-management workspace.
//!
//! The crate holds the session store (token storage, expiry check, refresh),
//! the route guard, the authenticated REST helpers, and the pages rendered
//! on top of them. The host binary renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
