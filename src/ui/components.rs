//! Reusable UI components

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::edit::EditAction;
use crate::render::{EditRow, TopSiteItem};

#[derive(Properties, PartialEq)]
pub struct TopSiteLinkProps {
    pub item: TopSiteItem,
}

#[function_component(TopSiteLink)]
pub fn top_site_link(props: &TopSiteLinkProps) -> Html {
    html! {
        <li class="my-3">
            <a class="py-1 px-2" href={props.item.href.clone()}>{&props.item.text}</a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditSiteRowProps {
    pub row: EditRow,
    pub on_action: Callback<EditAction>,
}

/// Text input prefilled with the url, plus Save and Delete
#[function_component(EditSiteRow)]
pub fn edit_site_row(props: &EditSiteRowProps) -> Html {
    let input_ref = use_node_ref();

    let on_save = {
        let input_ref = input_ref.clone();
        let on_action = props.on_action.clone();
        let row = props.row.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                on_action.emit(EditAction::Save {
                    index: row.index,
                    original: row.value.clone(),
                    url: input.value(),
                });
            }
        })
    };

    let on_delete = {
        let on_action = props.on_action.clone();
        let row = props.row.clone();
        Callback::from(move |_| {
            on_action.emit(EditAction::Delete {
                index: row.index,
                url: row.value.clone(),
            });
        })
    };

    html! {
        <span class="edit-site-row">
            <input type="text" ref={input_ref} value={props.row.value.clone()} />
            <span>
                <Button onclick={on_save} variant={ButtonVariant::Secondary}>
                    {"Save"}
                </Button>
                <Button onclick={on_delete} variant={ButtonVariant::Danger}>
                    {"Delete"}
                </Button>
            </span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct AddSiteRowProps {
    pub on_add: Callback<String>,
}

#[function_component(AddSiteRow)]
pub fn add_site_row(props: &AddSiteRowProps) -> Html {
    let input_ref = use_node_ref();

    let on_click = {
        let input_ref = input_ref.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                on_add.emit(input.value());
                input.set_value("");
            }
        })
    };

    html! {
        <span class="add-site-row">
            <input type="text" ref={input_ref} placeholder="example.com" />
            <Button onclick={on_click} variant={ButtonVariant::Primary}>
                {"Add"}
            </Button>
        </span>
    }
}
