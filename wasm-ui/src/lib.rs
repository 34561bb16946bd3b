//! Web UI for yaml-schema-rs
//!
//! A Yew-based page that shows a YAML editor next to the derived JSON and
//! JSON Schema, with copy buttons and a light/dark theme toggle.

mod app;
mod clipboard;
mod components;
mod theme;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
