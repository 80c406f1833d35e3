//! Top sites widget: read-only list, toggle button and edit form

use std::rc::Rc;

use yew::prelude::*;

use crate::config::TopSitesConfig;
use crate::controller::{TopSitesAction, TopSitesState};
use crate::edit::{EditAction, EditActionHandler, StoreEditHandler};
use crate::storage::LocalStorage;
use crate::top_sites::TopSiteStore;
use crate::ui::components::{AddSiteRow, EditSiteRow, TopSiteLink};

#[derive(Properties)]
pub struct TopSitesProps {
    pub config: TopSitesConfig,
    pub store: Rc<TopSiteStore<LocalStorage>>,
}

impl PartialEq for TopSitesProps {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Rc::ptr_eq(&self.store, &other.store)
    }
}

#[function_component(TopSitesApp)]
pub fn top_sites_app(props: &TopSitesProps) -> Html {
    let state = {
        let store = props.store.clone();
        use_reducer(move || {
            let handler: Rc<dyn EditActionHandler> = Rc::new(StoreEditHandler::new(store.clone()));
            TopSitesState::load(store, handler)
        })
    };

    // Toggle button listener; the default action would submit/navigate
    let on_toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(TopSitesAction::Toggle);
        })
    };

    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: EditAction| {
            state.dispatch(TopSitesAction::Edit(action));
        })
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |url: String| {
            state.dispatch(TopSitesAction::Insert(url));
        })
    };

    let config = &props.config;
    let expanded = state.edit_form.is_expanded();
    let hidden = (!expanded).then(|| config.hidden_class.clone());

    html! {
        <div class="top-sites-container">
            <ul id={config.list_id.clone()}>
                {for state.list.iter().map(|item| html! {
                    <TopSiteLink item={item.clone()} />
                })}
            </ul>

            <button
                id={config.toggle_id.clone()}
                class="pf-v5-c-button pf-m-link"
                onclick={on_toggle}
            >
                {state.edit_form.toggle_label()}
            </button>

            <form id={config.form_id.clone()} class={classes!(hidden)} onsubmit={on_submit}>
                if expanded {
                    <>
                        {for state.edit_form.rows().iter().map(|row| html! {
                            <EditSiteRow
                                key={format!("{}-{}", row.index, row.value)}
                                row={row.clone()}
                                on_action={on_action.clone()}
                            />
                        })}
                        <AddSiteRow on_add={on_add} />
                    </>
                }
            </form>
        </div>
    }
}
