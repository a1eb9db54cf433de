//! The mounted content view and the messages its load task sends back.

use cheatsheet_loader::{LoadOutcome, LoadState};
use cheatsheet_types::ui::Route;
use cheatsheet_types::{HeresiesChecklist, VerseCheatsheet};

/// The one view currently mounted under the shell.
///
/// Unmounting drops the whole value, document included.
#[derive(Debug)]
pub enum MountedView {
    Verses(LoadState<VerseCheatsheet>),
    Heresies(LoadState<HeresiesChecklist>),
}

impl MountedView {
    #[must_use]
    pub fn loading(route: Route) -> Self {
        match route {
            Route::Verses => MountedView::Verses(LoadState::Loading),
            Route::Heresies => MountedView::Heresies(LoadState::Loading),
        }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            MountedView::Verses(_) => Route::Verses,
            MountedView::Heresies(_) => Route::Heresies,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        match self {
            MountedView::Verses(state) => state.is_loading(),
            MountedView::Heresies(state) => state.is_loading(),
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            MountedView::Verses(state) => state.error(),
            MountedView::Heresies(state) => state.error(),
        }
    }
}

/// Load outcome for either view, as carried by the engine's channel.
#[derive(Debug)]
pub enum ViewLoad {
    Verses(LoadOutcome<VerseCheatsheet>),
    Heresies(LoadOutcome<HeresiesChecklist>),
}

impl From<LoadOutcome<VerseCheatsheet>> for ViewLoad {
    fn from(outcome: LoadOutcome<VerseCheatsheet>) -> Self {
        ViewLoad::Verses(outcome)
    }
}

impl From<LoadOutcome<HeresiesChecklist>> for ViewLoad {
    fn from(outcome: LoadOutcome<HeresiesChecklist>) -> Self {
        ViewLoad::Heresies(outcome)
    }
}
