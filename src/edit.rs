//! Save/Delete commands issued from the edit form

use std::rc::Rc;

use log::info;

use crate::error::TopSitesError;
use crate::storage::Storage;
use crate::top_sites::TopSiteStore;

/// A command from one edit row; `index` is the row's position when the form
/// was rendered. `Save` carries the row's `original` url and the new `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Save { index: usize, original: String, url: String },
    Delete { index: usize, url: String },
}

impl EditAction {
    pub fn url(&self) -> &str {
        match self {
            EditAction::Save { url, .. } | EditAction::Delete { url, .. } => url,
        }
    }
}

pub trait EditActionHandler {
    fn handle(&self, action: &EditAction) -> Result<(), TopSitesError>;
}

/// Only reports the action, changes nothing
pub struct LoggingEditHandler;

impl EditActionHandler for LoggingEditHandler {
    fn handle(&self, action: &EditAction) -> Result<(), TopSitesError> {
        match action {
            EditAction::Save { url, .. } => info!("placeholder: save top site: {}", url),
            EditAction::Delete { url, .. } => info!("placeholder: delete top site: {}", url),
        }
        Ok(())
    }
}

/// Applies edits to the stored list
pub struct StoreEditHandler<S: Storage> {
    store: Rc<TopSiteStore<S>>,
}

impl<S: Storage> StoreEditHandler<S> {
    pub fn new(store: Rc<TopSiteStore<S>>) -> Self {
        StoreEditHandler { store }
    }
}

impl<S: Storage> EditActionHandler for StoreEditHandler<S> {
    fn handle(&self, action: &EditAction) -> Result<(), TopSitesError> {
        match action {
            EditAction::Save { index, original, url } => {
                self.store.update_top_site(*index, original, url).map(|_| ())
            }
            EditAction::Delete { index, url } => self.store.remove_top_site(*index, url).map(|_| ()),
        }
    }
}
