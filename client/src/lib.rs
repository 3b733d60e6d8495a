//! # dashboard-client
//!
//! Leptos + WASM frontend for the bombona tracking dashboard: asset detail
//! and editing, unlinked RFID tag assignment, and a live read dashboard.
//!
//! The crate is rendered on the server by the host binary (`ssr`) and
//! hydrated in the browser (`hydrate`). Network calls only run in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
