//! # patient-records-ui
//!
//! Leptos + WASM frontend for the patient-record system. Replaces the
//! React administrative client with a Rust-native UI layer.
//!
//! The crate splits into a session core (`session`: credential storage,
//! claim decoding, route gating), the typed request gateway (`net`), shared
//! view state (`state`), pure field validators (`util`), and thin Leptos
//! pages and components on top.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
