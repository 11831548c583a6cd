//! # client
//!
//! Leptos + WASM frontend for the Windsurf login demo: a login form and a
//! signup form sharing one screen, backed by browser localStorage, plus the
//! post-login success page.
//!
//! `auth` is browser-independent and carries all of the rules; `pages` render
//! it; `util` holds the `web-sys` glue.

pub mod app;
pub mod auth;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
