//! Page configuration for the top sites widget
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::top_sites::DEFAULT_TOP_SITES;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TopSitesConfig {
    /// localStorage key holding the JSON array of urls
    pub storage_key: String,
    /// Element the Yew app is mounted into
    pub root_id: String,
    pub list_id: String,
    pub form_id: String,
    pub toggle_id: String,
    /// Class that hides the edit form while collapsed
    pub hidden_class: String,
    pub default_sites: Vec<String>,
    pub log_level: String,
}

impl Default for TopSitesConfig {
    fn default() -> Self {
        TopSitesConfig {
            storage_key: "topSites".to_string(),
            root_id: "top-sites-root".to_string(),
            list_id: "top-sites".to_string(),
            form_id: "form-edit-top-sites".to_string(),
            toggle_id: "btn-toggle-edit-top-sites".to_string(),
            hidden_class: "hidden".to_string(),
            default_sites: DEFAULT_TOP_SITES.iter().map(|s| s.to_string()).collect(),
            log_level: "debug".to_string(),
        }
    }
}

impl TopSitesConfig {
    /// Read a config object passed from JavaScript; missing fields fall back to defaults
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_null() || value.is_undefined() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| format!("Failed to parse config: {:?}", e))
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Debug)
    }
}
