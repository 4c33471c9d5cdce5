pub mod app;
pub mod components;
#[cfg(any(test, feature = "ssr"))]
pub mod config;
pub mod models;
pub mod motion;
pub mod pages;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
