//! Display projections of the top sites list

use log::debug;

/// One entry of the read-only list: a link whose href and text are the url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSiteItem {
    pub href: String,
    pub text: String,
}

/// One row of the edit form: a text input prefilled with the url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRow {
    pub index: usize,
    pub value: String,
}

pub fn populate_top_sites_list(urls: &[String]) -> Vec<TopSiteItem> {
    urls.iter()
        .map(|url| TopSiteItem {
            href: url.clone(),
            text: url.clone(),
        })
        .collect()
}

/// Generate rows for the edit top sites form
pub fn generate_edit_form(urls: &[String]) -> Vec<EditRow> {
    debug!("generating edit site form rows for {} sites", urls.len());
    urls.iter()
        .enumerate()
        .map(|(index, url)| EditRow {
            index,
            value: url.clone(),
        })
        .collect()
}
