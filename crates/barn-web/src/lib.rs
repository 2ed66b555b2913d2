//! Barn Web Console
//!
//! Leptos-based WASM frontend: edit a price history, a trade order or a
//! portfolio, submit it to the analysis service and show the result.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    api::check_config();
    leptos::mount::mount_to_body(App);
}
