//! Navigation routes.
//!
//! The active tab and the navigation path are both derived from a single
//! `Route`, so they cannot disagree.

/// The two mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Verses,
    Heresies,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Verses, Route::Heresies];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Verses => "/",
            Route::Heresies => "/heresies",
        }
    }

    /// Resolve a navigation path. A single trailing slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    #[must_use]
    pub const fn tab_index(self) -> usize {
        match self {
            Route::Verses => 0,
            Route::Heresies => 1,
        }
    }

    #[must_use]
    pub fn from_tab_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Route::Verses => "Bible Verses",
            Route::Heresies => "Heresies Checklist",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.tab_index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.tab_index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
