//! Top sites page state: the read-only list plus the edit form toggle
use std::rc::Rc;

use log::{debug, error};
use yew::prelude::*;

use crate::edit::{EditAction, EditActionHandler};
use crate::render::{EditRow, TopSiteItem, generate_edit_form, populate_top_sites_list};
use crate::storage::Storage;
use crate::top_sites::TopSiteStore;

/// Edit form container contents; `Collapsed` renders hidden and empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditForm {
    Collapsed,
    Expanded(Vec<EditRow>),
}

impl EditForm {
    pub fn is_expanded(&self) -> bool {
        matches!(self, EditForm::Expanded(_))
    }

    pub fn rows(&self) -> &[EditRow] {
        match self {
            EditForm::Collapsed => &[],
            EditForm::Expanded(rows) => rows,
        }
    }

    /// Label for the toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self {
            EditForm::Collapsed => "edit",
            EditForm::Expanded(_) => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopSitesAction {
    Toggle,
    Insert(String),
    Edit(EditAction),
    Refresh,
}

pub struct TopSitesState<S: Storage> {
    store: Rc<TopSiteStore<S>>,
    handler: Rc<dyn EditActionHandler>,
    pub list: Vec<TopSiteItem>,
    pub edit_form: EditForm,
}

impl<S: Storage> TopSitesState<S> {
    /// Initial state on page load: list rendered, edit form collapsed
    pub fn load(store: Rc<TopSiteStore<S>>, handler: Rc<dyn EditActionHandler>) -> Self {
        let list = populate_top_sites_list(&store.get_top_sites());
        TopSitesState {
            store,
            handler,
            list,
            edit_form: EditForm::Collapsed,
        }
    }

    pub fn store(&self) -> &TopSiteStore<S> {
        &self.store
    }

    /// Re-read the store; an open edit form is regenerated too
    fn refreshed(&self) -> Self {
        let urls = self.store.get_top_sites();
        let edit_form = match self.edit_form {
            EditForm::Collapsed => EditForm::Collapsed,
            EditForm::Expanded(_) => EditForm::Expanded(generate_edit_form(&urls)),
        };
        TopSitesState {
            store: self.store.clone(),
            handler: self.handler.clone(),
            list: populate_top_sites_list(&urls),
            edit_form,
        }
    }

    pub fn toggle_top_sites_edit_form(&self) -> Self {
        let edit_form = match self.edit_form {
            EditForm::Collapsed => {
                EditForm::Expanded(generate_edit_form(&self.store.get_top_sites()))
            }
            EditForm::Expanded(_) => EditForm::Collapsed,
        };
        debug!("edit form toggled to {}", edit_form.toggle_label());
        TopSitesState {
            store: self.store.clone(),
            handler: self.handler.clone(),
            list: self.list.clone(),
            edit_form,
        }
    }

    /// Add a site then re-render. Failures are logged and leave the page as it was.
    pub fn insert_top_site_item(&self, url: &str) -> Self {
        if let Err(e) = self.store.add_top_site(url) {
            error!("could not add top site: {}", e);
        }
        self.refreshed()
    }

    pub fn apply_edit(&self, action: &EditAction) -> Self {
        if let Err(e) = self.handler.handle(action) {
            error!("could not apply {:?}: {}", action, e);
        }
        self.refreshed()
    }
}

impl<S: Storage + 'static> Reducible for TopSitesState<S> {
    type Action = TopSitesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            TopSitesAction::Toggle => self.toggle_top_sites_edit_form(),
            TopSitesAction::Insert(url) => self.insert_top_site_item(&url),
            TopSitesAction::Edit(edit) => self.apply_edit(&edit),
            TopSitesAction::Refresh => self.refreshed(),
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use yew::functional::Reducible;

    use crate::edit::{LoggingEditHandler, StoreEditHandler};
    use crate::error::TopSitesError;
    use crate::storage::MemoryStorage;
    use crate::top_sites::DEFAULT_TOP_SITES;

    /// Remembers every action it is given
    #[derive(Default)]
    struct RecordingHandler {
        seen: RefCell<Vec<EditAction>>,
    }

    impl EditActionHandler for RecordingHandler {
        fn handle(&self, action: &EditAction) -> Result<(), TopSitesError> {
            self.seen.borrow_mut().push(action.clone());
            Ok(())
        }
    }

    fn create_test_state(stored: Option<&str>) -> TopSitesState<MemoryStorage> {
        let storage = match stored {
            Some(json) => MemoryStorage::with_item("topSites", json),
            None => MemoryStorage::new(),
        };
        TopSitesState::load(Rc::new(TopSiteStore::new(storage)), Rc::new(LoggingEditHandler))
    }

    fn hrefs(state: &TopSitesState<MemoryStorage>) -> Vec<String> {
        state.list.iter().map(|item| item.href.clone()).collect()
    }

    #[test]
    fn test_load_empty_store_renders_defaults() {
        let state = create_test_state(None);

        assert_eq!(state.list.len(), 8);
        assert_eq!(hrefs(&state), DEFAULT_TOP_SITES.to_vec());
        assert_eq!(state.edit_form, EditForm::Collapsed);
        assert_eq!(state.edit_form.toggle_label(), "edit");
    }

    #[test]
    fn test_toggle_expands_then_collapses() {
        let state = create_test_state(Some(r#"["https://a.com","https://b.com","https://c.com"]"#));

        let expanded = state.toggle_top_sites_edit_form();
        assert!(expanded.edit_form.is_expanded());
        assert_eq!(expanded.edit_form.rows().len(), 3);
        assert_eq!(expanded.edit_form.rows()[2].value, "https://c.com");
        assert_eq!(expanded.edit_form.toggle_label(), "done");

        let collapsed = expanded.toggle_top_sites_edit_form();
        assert_eq!(collapsed.edit_form, EditForm::Collapsed);
        assert!(collapsed.edit_form.rows().is_empty());
        assert_eq!(collapsed.edit_form.toggle_label(), "edit");
    }

    #[test]
    fn test_insert_rerenders_list() {
        let state = create_test_state(None);

        let next = state.insert_top_site_item("example.com");

        assert_eq!(next.list.len(), 9);
        assert_eq!(next.list[8].href, "https://example.com");
        assert_eq!(next.list[8].text, "https://example.com");
    }

    #[test]
    fn test_insert_invalid_keeps_list() {
        let state = create_test_state(Some(r#"["https://a.com"]"#));

        let next = state.insert_top_site_item("");

        assert_eq!(hrefs(&next), vec!["https://a.com"]);
        assert_eq!(
            next.store().storage().raw("topSites"),
            Some(r#"["https://a.com"]"#.to_string())
        );
    }

    #[test]
    fn test_insert_resyncs_open_edit_form() {
        let state = create_test_state(Some(r#"["https://a.com"]"#)).toggle_top_sites_edit_form();

        let next = state.insert_top_site_item("b.com");

        assert_eq!(next.edit_form.rows().len(), 2);
        assert_eq!(next.edit_form.rows()[1].value, "https://b.com");
    }

    #[test]
    fn test_insert_keeps_collapsed_form_collapsed() {
        let state = create_test_state(None);

        let next = state.insert_top_site_item("b.com");

        assert_eq!(next.edit_form, EditForm::Collapsed);
    }

    #[test]
    fn test_edit_dispatches_to_handler() {
        let storage = MemoryStorage::with_item("topSites", r#"["https://a.com","https://b.com"]"#);
        let handler = Rc::new(RecordingHandler::default());
        let state = TopSitesState::load(Rc::new(TopSiteStore::new(storage)), handler.clone());

        let save = EditAction::Save {
            index: 0,
            original: "https://a.com".to_string(),
            url: "https://a.org".to_string(),
        };
        let delete = EditAction::Delete { index: 1, url: "https://b.com".to_string() };
        let state = state.apply_edit(&save);
        state.apply_edit(&delete);

        assert_eq!(*handler.seen.borrow(), vec![save, delete]);
        assert_eq!(hrefs(&state), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_edit_with_store_handler_updates_list_and_form() {
        let store = Rc::new(TopSiteStore::new(MemoryStorage::with_item(
            "topSites",
            r#"["https://a.com","https://b.com"]"#,
        )));
        let handler = Rc::new(StoreEditHandler::new(store.clone()));
        let state = TopSitesState::load(store, handler).toggle_top_sites_edit_form();

        let state = state.apply_edit(&EditAction::Delete { index: 0, url: "https://a.com".to_string() });

        assert_eq!(hrefs(&state), vec!["https://b.com"]);
        assert_eq!(state.edit_form.rows().len(), 1);
        assert_eq!(state.edit_form.rows()[0].index, 0);
    }

    #[test]
    fn test_reduce_actions() {
        let state = Rc::new(create_test_state(None));

        let state = state.reduce(TopSitesAction::Toggle);
        assert_eq!(state.edit_form.rows().len(), 8);

        let state = state.reduce(TopSitesAction::Insert("new.com".to_string()));
        assert_eq!(state.list.len(), 9);
        assert_eq!(state.edit_form.rows().len(), 9);

        let state = state.reduce(TopSitesAction::Toggle);
        assert_eq!(state.edit_form, EditForm::Collapsed);
        assert_eq!(state.list.len(), 9);
    }

    #[test]
    fn test_refresh_picks_up_external_writes() {
        let state = Rc::new(create_test_state(Some(r#"["https://a.com"]"#)));
        state.store().add_top_site("other-tab.com").unwrap();

        let state = state.reduce(TopSitesAction::Refresh);

        assert_eq!(hrefs(&state), vec!["https://a.com", "https://other-tab.com"]);
    }
}
