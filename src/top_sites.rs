//! The persisted top sites list

use log::{debug, error, info, warn};

use crate::config::TopSitesConfig;
use crate::error::TopSitesError;
use crate::sanitize::clean_url;
use crate::storage::Storage;

pub const DEFAULT_TOP_SITES: [&str; 8] = [
    "https://duckduckgo.com",
    "https://dev.to/",
    "https://www.hackthebox.com",
    "https://github.com",
    "https://en.wikipedia.org",
    "https://nytimes.com",
    "https://news.ycombinator.com",
    "https://unsplash.com",
];

/// Ordered list of urls kept under a single storage key.
///
/// The store never caches the list: every operation re-reads the slot, so
/// two tabs writing at once follow last-writer-wins.
pub struct TopSiteStore<S: Storage> {
    storage: S,
    key: String,
    defaults: Vec<String>,
}

impl<S: Storage> TopSiteStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, &TopSitesConfig::default())
    }

    pub fn with_config(storage: S, config: &TopSitesConfig) -> Self {
        TopSiteStore {
            storage,
            key: config.storage_key.clone(),
            defaults: config.default_sites.clone(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Return the stored top sites; if empty, returns the default sites.
    /// The defaults are never written back.
    pub fn get_top_sites(&self) -> Vec<String> {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not read top sites, using defaults: {}", e);
                None
            }
        };

        let sites: Vec<String> = match raw {
            Some(json) => match serde_json::from_str::<Option<Vec<String>>>(&json) {
                Ok(sites) => sites.unwrap_or_default(),
                Err(e) => {
                    warn!("stored top sites are not a url array, using defaults: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if sites.is_empty() {
            self.defaults.clone()
        } else {
            sites
        }
    }

    /// Append a cleaned url to the stored list and return the new list
    pub fn add_top_site(&self, raw: &str) -> Result<Vec<String>, TopSitesError> {
        let url = clean_url(raw).map_err(|e| {
            error!("invalid url {:?}: {}", raw, e);
            e
        })?;

        let mut sites = self.get_top_sites();
        sites.push(url);
        self.store(&sites)?;
        Ok(sites)
    }

    /// Replace `original` with a cleaned `raw`. `index` is where the edit
    /// form saw `original`; if the list moved since, the url is looked up.
    pub fn update_top_site(
        &self,
        index: usize,
        original: &str,
        raw: &str,
    ) -> Result<Vec<String>, TopSitesError> {
        let url = clean_url(raw).map_err(|e| {
            error!("invalid url {:?}: {}", raw, e);
            e
        })?;

        let mut sites = self.get_top_sites();
        let found = locate(&sites, index, original)?;
        sites[found] = url;
        self.store(&sites)?;
        Ok(sites)
    }

    /// Remove `url`, expected at `index`. An emptied list reads back as the defaults.
    pub fn remove_top_site(&self, index: usize, url: &str) -> Result<Vec<String>, TopSitesError> {
        let mut sites = self.get_top_sites();
        let found = locate(&sites, index, url)?;
        let removed = sites.remove(found);
        debug!("removing top site {} at {}", removed, found);
        self.store(&sites)?;
        Ok(sites)
    }

    fn store(&self, sites: &[String]) -> Result<(), TopSitesError> {
        let json = serde_json::to_string(sites)?;
        match self.storage.set(&self.key, &json) {
            Ok(()) => {
                info!("stored site");
                Ok(())
            }
            Err(e) => {
                error!("error storing site: {}", e);
                Err(e.into())
            }
        }
    }
}

/// Position of `url`, trusting `index` only while it still holds that url
fn locate(sites: &[String], index: usize, url: &str) -> Result<usize, TopSitesError> {
    if sites.get(index).is_some_and(|site| site == url) {
        return Ok(index);
    }
    sites.iter().position(|site| site == url).ok_or_else(|| {
        warn!("top site {} moved or was removed elsewhere", url);
        TopSitesError::SiteNotFound {
            index,
            url: url.to_string(),
        }
    })
}
