use std::path::PathBuf;

use url::Url;

use cheatsheet_config::ContentLocation;

use crate::LoadError;

/// Where documents are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Base URL; always stored with a trailing slash so joins keep the last segment.
    Http(Url),
    Directory(PathBuf),
}

impl ContentSource {
    pub fn http(raw: &str) -> Result<Self, LoadError> {
        let mut url = Url::parse(raw.trim()).map_err(|source| LoadError::InvalidUrl {
            raw: raw.to_string(),
            source,
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self::Http(url))
    }

    #[must_use]
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory(path.into())
    }

    pub fn from_location(location: &ContentLocation) -> Result<Self, LoadError> {
        match location {
            ContentLocation::BaseUrl(raw) => Self::http(raw),
            ContentLocation::Directory(dir) => Ok(Self::directory(dir.clone())),
        }
    }

    /// Full URL for a resource. Only meaningful for HTTP sources.
    pub(crate) fn url_for(&self, resource_path: &str) -> Result<Url, LoadError> {
        match self {
            ContentSource::Http(base) => {
                base.join(resource_path).map_err(|source| LoadError::InvalidUrl {
                    raw: format!("{base}{resource_path}"),
                    source,
                })
            }
            ContentSource::Directory(dir) => {
                let raw = dir.join(resource_path).display().to_string();
                Err(LoadError::InvalidUrl {
                    raw,
                    source: url::ParseError::RelativeUrlWithoutBase,
                })
            }
        }
    }

    /// Human-readable origin for logs and the status bar.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            ContentSource::Http(url) => url.to_string(),
            ContentSource::Directory(dir) => dir.display().to_string(),
        }
    }
}
