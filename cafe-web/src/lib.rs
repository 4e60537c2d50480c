#![forbid(unsafe_code)]
//! Friends' Cafe web front end
//!
//! Yew pages over the `cafe-cart` core. The cart lives in one reducer shared
//! through context and is saved to `localStorage` after every change.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod cart;
pub mod components;
pub mod data;
pub mod dom;
pub mod format;
pub mod i18n;
pub mod input;
pub mod pages;
pub mod paths;
pub mod router;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("lang", &i18n::current_lang());
    }
    yew::Renderer::<app::App>::new().render();
}
