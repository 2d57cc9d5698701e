//! Dunk Low landing page - Leptos CSR frontend
//!
//! The page logic lives in the `shared` crate; this crate mounts it, drives its
//! timers with the browser event loop and renders the presentational pieces.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("landing page starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
    hide_loading_screen();
}

/// Hide the static splash that index.html shows until the wasm module runs.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available, leaving loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("loading element #{} not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("failed to add 'hidden' class: {:?}", e);
        }
    }
    // Also set display:none in case the stylesheet has not loaded yet
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("failed to hide loading element: {:?}", e);
    }
}
