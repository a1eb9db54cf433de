//! Read-only loader for the two content documents.
//!
//! # Pipeline
//!
//! 1. **Resolve** - join the document's resource path onto the content source
//! 2. **Fetch** - HTTP GET (2xx required) or a plain file read
//! 3. **Validate** - [`cheatsheet_types::parse_document`] checks the shape
//!
//! Every failure is kept as a distinct [`LoadError`] for logs, but users only
//! ever see [`LoadError::user_message`], which is the same for all causes.
//! Nothing is retried.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `source` | Content source (base URL or directory) and path resolution |
//! | `error` | Structured load errors and the generic user message |
//! | `task` | Background load tasks, mount ids and the per-view load state |

mod error;
mod source;
mod task;

use std::time::Duration;

use cheatsheet_types::{Document, parse_document};

pub use error::{GENERIC_ERROR_MESSAGE, LoadError};
pub use source::ContentSource;
pub use task::{LoadOutcome, LoadState, MountId, spawn_load};

const USER_AGENT: &str = concat!("cheatsheet/", env!("CARGO_PKG_VERSION"));

/// Fetches documents from one content source.
///
/// Cheap to clone: the HTTP client is reference counted internally.
#[derive(Debug, Clone)]
pub struct Loader {
    client: reqwest::Client,
    source: ContentSource,
}

impl Loader {
    /// `timeout` of `None` means requests never time out.
    pub fn new(source: ContentSource, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LoadError::Network)?;
        Ok(Self { client, source })
    }

    #[must_use]
    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Fetch, check and parse one document.
    pub async fn fetch<D: Document>(&self) -> Result<D, LoadError> {
        let result = self.fetch_inner::<D>().await;
        match &result {
            Ok(_) => tracing::debug!(document = D::LABEL, "Document loaded"),
            Err(err) => tracing::warn!(document = D::LABEL, error = %err, "Error loading data"),
        }
        result
    }

    async fn fetch_inner<D: Document>(&self) -> Result<D, LoadError> {
        let body = match &self.source {
            ContentSource::Http(_) => {
                let url = self.source.url_for(D::RESOURCE_PATH)?;
                tracing::debug!(%url, "GET document");
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(LoadError::Network)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status { url, status });
                }
                response.bytes().await.map_err(LoadError::Network)?.to_vec()
            }
            ContentSource::Directory(dir) => {
                let path = dir.join(D::RESOURCE_PATH);
                tracing::debug!(path = %path.display(), "Read document");
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| LoadError::Io { path, source })?
            }
        };

        Ok(parse_document::<D>(&body)?)
    }
}
