//! # client
//!
//! Leptos + WASM frontend for the authgate login demo.
//!
//! This crate contains the pages, components, session state and form
//! validation rules. The root `authgate` binary renders it on the server
//! (`ssr` feature); the browser bundle hydrates it (`hydrate` feature).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
