//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the pages, shared components, static site content,
//! the persisted theme store, and the browser glue for scroll-linked
//! animation. Layout math for the stacking case-study cards lives in the
//! `parallax` crate.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
