//! URL cleaning before a site is admitted into the store
use std::sync::OnceLock;

use log::warn;
use regex::Regex;
use url::Url;

use crate::error::UrlError;

/// Matches the first character outside the allowlist
fn disallowed_char() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-zA-Z0-9+?%/:.\-]").expect("static pattern compiles"))
}

/// Clean up a url for storing to top sites
///
/// 1. Reject empty or whitespace-only input
/// 2. Trim surrounding whitespace
/// 3. Reject if any character falls outside `[a-zA-Z0-9+?%/:.-]`
/// 4. Prepend `https://` unless the value already starts with `http`
///
/// The `http` check is a plain prefix test, so `httpbin.org` is kept as is.
/// Values the url parser would refuse are still accepted; they only get a
/// warning in the log.
pub fn clean_url(raw: &str) -> Result<String, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    if let Some(found) = disallowed_char().find(trimmed) {
        let c = found.as_str().chars().next().unwrap_or_default();
        return Err(UrlError::DisallowedCharacter(c));
    }

    let cleaned = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    if let Err(e) = Url::parse(&cleaned) {
        warn!("{} is not an absolute url: {}", cleaned, e);
    }

    Ok(cleaned)
}
