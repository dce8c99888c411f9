//! # client
//!
//! Leptos + WASM frontend for the mail sorter. Users sign in through Google,
//! the backend hands a one-time token back to `/auth-callback`, and the
//! dashboard then drives category and email management.
//!
//! This crate contains pages, components, auth/session plumbing, REST
//! wrappers and shared wire types. Browser-only behavior sits behind the
//! `hydrate` feature; `ssr` builds render the same tree on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
