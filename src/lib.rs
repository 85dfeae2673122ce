pub mod api;
pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
