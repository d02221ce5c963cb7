//! # client
//!
//! Leptos + WASM frontend for the Shelfmark book catalog.
//!
//! Pages, components, and reactive state live here; wire types, error
//! normalization, and the session state machine come from the `catalog`
//! crate. Build with the `csr` feature (e.g. `trunk serve --features csr`)
//! to get the browser transport and the mount entrypoint.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: install panic/log hooks and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {error}");
    }
    leptos::mount::mount_to_body(app::App);
}
