//! Top Sites - personal quick-access links kept in localStorage
//! Built with Rust + WASM + Yew

pub mod config;
pub mod controller;
pub mod edit;
pub mod error;
pub mod render;
pub mod sanitize;
pub mod storage;
pub mod top_sites;
pub mod ui;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::TopSitesConfig;
use crate::error::TopSitesError;
use crate::storage::LocalStorage;
use crate::top_sites::TopSiteStore;
use crate::ui::app::{TopSitesApp, TopSitesProps};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Clean a url for JavaScript callers; an empty string means it was rejected
#[wasm_bindgen]
pub fn clean_url(url: &str) -> String {
    sanitize::clean_url(url).unwrap_or_else(|e| {
        log::error!("invalid url: {}", e);
        String::new()
    })
}

// Render the top sites list and bind the edit toggle with the default page layout
#[wasm_bindgen]
pub fn start_top_sites() -> Result<(), JsValue> {
    start_top_sites_with_config(JsValue::UNDEFINED)
}

#[wasm_bindgen]
pub fn start_top_sites_with_config(config: JsValue) -> Result<(), JsValue> {
    let config = TopSitesConfig::from_js(config).map_err(|e| JsValue::from_str(&e))?;
    log::set_max_level(config.level_filter());

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&config.root_id))
        .ok_or_else(|| to_js_error(TopSitesError::MissingElement(config.root_id.clone())))?;

    let storage = LocalStorage::new().map_err(|e| to_js_error(e.into()))?;
    let store = Rc::new(TopSiteStore::with_config(storage, &config));

    log::debug!("mounting top sites into #{}", config.root_id);
    yew::Renderer::<TopSitesApp>::with_root_and_props(root, TopSitesProps { config, store }).render();
    Ok(())
}

fn to_js_error(err: TopSitesError) -> JsValue {
    log::error!("{}", err);
    JsValue::from_str(&err.to_string())
}
