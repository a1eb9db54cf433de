//! Background load tasks.
//!
//! A view that mounts gets a fresh [`MountId`] and spawns one load task.
//! The task reports back over a channel tagged with that id; the receiver
//! compares it with the currently mounted view and drops stale outcomes.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use cheatsheet_types::Document;

use crate::{LoadError, Loader};

/// Identifies one mount of a view. Increases monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

impl MountId {
    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Result of one load task.
#[derive(Debug)]
pub struct LoadOutcome<D> {
    pub mount: MountId,
    pub result: Result<D, LoadError>,
}

/// Observable state of a view's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<D> {
    Loading,
    /// Human-readable message; causes are not distinguished.
    Failed(String),
    Ready(D),
}

impl<D> Default for LoadState<D> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<D> LoadState<D> {
    #[must_use]
    pub fn from_result(result: Result<D, LoadError>) -> Self {
        match result {
            Ok(doc) => LoadState::Ready(doc),
            Err(err) => LoadState::Failed(err.user_message().to_string()),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&D> {
        match self {
            LoadState::Ready(doc) => Some(doc),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Fetch `D` in the background and send the outcome, converted into the
/// receiver's message type, over `tx`.
///
/// There is no timeout beyond the loader's own and no cancellation. A
/// closed receiver is ignored.
pub fn spawn_load<D, M>(
    loader: Loader,
    mount: MountId,
    tx: mpsc::UnboundedSender<M>,
) -> JoinHandle<()>
where
    D: Document,
    M: From<LoadOutcome<D>> + Send + 'static,
{
    tokio::spawn(async move {
        let result = loader.fetch::<D>().await;
        if tx.send(LoadOutcome { mount, result }.into()).is_err() {
            tracing::debug!(
                document = D::LABEL,
                mount = mount.get(),
                "Load finished after receiver closed"
            );
        }
    })
}
