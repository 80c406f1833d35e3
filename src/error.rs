//! Error types for Top Sites
use thiserror::Error;

/// Reasons a raw URL is refused before it reaches storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("url is empty")]
    Empty,
    #[error("url contains disallowed character {0:?}")]
    DisallowedCharacter(char),
}

/// Failures of the key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum TopSitesError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode top sites: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("top site {url} is no longer in the list (expected at {index})")]
    SiteNotFound { index: usize, url: String },
    #[error("missing element #{0}")]
    MissingElement(String),
}
