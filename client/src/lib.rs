//! # client
//!
//! Leptos + WASM frontend for the DocChat workspace: assistant chat with
//! clickable PDF page citations, an embedded PDF viewer, the knowledge-base
//! references table and account settings.
//!
//! Built with `ssr` for the host server and with `hydrate` for the browser
//! bundle. Citation parsing lives in the framework-agnostic `citations` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
