use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use cheatsheet_types::DocumentError;

/// The one message users see for any load failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("GET {url} returned {status}")]
    Status { url: Url, status: StatusCode },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("invalid content url {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        source: url::ParseError,
    },
}

impl LoadError {
    /// Causes are deliberately flattened for display.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}
