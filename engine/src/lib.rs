//! Core engine for the cheatsheet reader - shell state machine and view lifecycle.
//!
//! This crate contains the [`App`] state without terminal dependencies.
//!
//! # Shell
//!
//! The shell is always in exactly one of two states, one per [`Route`]. Both
//! are entry and exit states; there is no terminal state. A transition is
//! triggered only by tab selection or by navigating to a path, and it:
//!
//! 1. collapses the verse accordion,
//! 2. updates the route (the tab index and the path are both derived from it),
//! 3. unmounts the old view, discarding its document,
//! 4. mounts the new view, which spawns a fresh load,
//! 5. resets the scroll position to the top.
//!
//! Expansion state is owned here and passed down to the renderer; there is
//! no broadcast between components.
//!
//! # Loads
//!
//! Each mount gets a new [`MountId`]. Load tasks report over a channel that
//! [`App::process_load_events`] drains once per frame. An outcome whose id
//! does not match the mounted view arrived after its view was unmounted and
//! is dropped without touching state.

mod view;

use thiserror::Error;
use tokio::sync::mpsc;

pub use cheatsheet_config::{CheatsheetConfig, ContentLocation, Settings};
pub use cheatsheet_loader::{ContentSource, LoadError, LoadState, Loader, MountId};
pub use cheatsheet_types::ui::{
    Accordion, Route, ScrollRequest, ScrollState, ThemeMode, UiOptions,
};
pub use cheatsheet_types::{
    Category, CategoryBody, HeresiesChecklist, Heresy, Subcategory, Verse, VerseCheatsheet,
};
pub use view::{MountedView, ViewLoad};

/// Scroll offset (in lines) past which the header shows its scrolled accent.
pub const SCROLLED_THRESHOLD: u16 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no view at path {0:?}")]
    UnknownPath(String),
    #[error("no tab at index {0}")]
    UnknownTab(usize),
}

pub struct App {
    loader: Loader,
    route: Route,
    theme: ThemeMode,
    ui_options: UiOptions,
    view: MountedView,
    mount: MountId,
    accordion: Accordion,
    /// Selected section in the verse view.
    cursor: usize,
    scroll: ScrollState,
    scroll_request: ScrollRequest,
    viewport_height: u16,
    load_tx: mpsc::UnboundedSender<ViewLoad>,
    load_rx: mpsc::UnboundedReceiver<ViewLoad>,
    tick: usize,
    quit: bool,
}

impl App {
    /// Build the loader from `settings` and mount the start route.
    ///
    /// Must be called inside a tokio runtime.
    pub fn from_settings(settings: &Settings) -> Result<Self, LoadError> {
        let source = ContentSource::from_location(&settings.content)?;
        let loader = Loader::new(source, settings.timeout)?;
        Ok(Self::new(settings, loader))
    }

    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn new(settings: &Settings, loader: Loader) -> Self {
        let (load_tx, load_rx) = mpsc::unbounded_channel();
        tracing::info!(
            source = %loader.source().describe(),
            theme = settings.theme.as_str(),
            path = settings.start_route.path(),
            "Starting"
        );
        let mut app = Self {
            loader,
            route: settings.start_route,
            theme: settings.theme,
            ui_options: settings.ui_options,
            view: MountedView::loading(settings.start_route),
            mount: MountId::first(),
            accordion: Accordion::new(),
            cursor: 0,
            scroll: ScrollState::default(),
            scroll_request: ScrollRequest::None,
            viewport_height: 0,
            load_tx,
            load_rx,
            tick: 0,
            quit: false,
        };
        app.spawn_mount_load();
        app
    }

    // ------------------------------------------------------------------
    // Shell
    // ------------------------------------------------------------------

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Current navigation path.
    #[must_use]
    pub fn location(&self) -> &'static str {
        self.route.path()
    }

    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.route.tab_index()
    }

    pub fn select_tab(&mut self, index: usize) -> Result<(), NavigationError> {
        let route = Route::from_tab_index(index).ok_or(NavigationError::UnknownTab(index))?;
        self.switch_to(route);
        Ok(())
    }

    pub fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        let route =
            Route::from_path(path).ok_or_else(|| NavigationError::UnknownPath(path.to_string()))?;
        self.switch_to(route);
        Ok(())
    }

    pub fn next_tab(&mut self) {
        self.switch_to(self.route.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_to(self.route.prev());
    }

    fn switch_to(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!(from = self.route.path(), to = route.path(), "Navigate");
        self.route = route;
        self.remount();
    }

    /// Remount the current view, fetching its document again.
    pub fn reload(&mut self) {
        tracing::info!(path = self.route.path(), "Reload");
        self.remount();
    }

    /// Expansion, cursor and scroll live only as long as the mounted view.
    fn remount(&mut self) {
        self.accordion.collapse();
        self.cursor = 0;
        self.scroll.to_top();
        self.scroll_request = ScrollRequest::None;
        self.mount = self.mount.next();
        self.view = MountedView::loading(self.route);
        self.spawn_mount_load();
    }

    fn spawn_mount_load(&self) {
        let loader = self.loader.clone();
        let tx = self.load_tx.clone();
        match self.route {
            Route::Verses => {
                cheatsheet_loader::spawn_load::<VerseCheatsheet, _>(loader, self.mount, tx);
            }
            Route::Heresies => {
                cheatsheet_loader::spawn_load::<HeresiesChecklist, _>(loader, self.mount, tx);
            }
        }
    }

    /// Apply finished loads. Returns `true` if the mounted view changed.
    pub fn process_load_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.load_rx.try_recv() {
            changed |= self.apply_load(event);
        }
        changed
    }

    fn apply_load(&mut self, event: ViewLoad) -> bool {
        match (event, &mut self.view) {
            (ViewLoad::Verses(outcome), MountedView::Verses(state))
                if outcome.mount == self.mount =>
            {
                *state = LoadState::from_result(outcome.result);
                true
            }
            (ViewLoad::Heresies(outcome), MountedView::Heresies(state))
                if outcome.mount == self.mount =>
            {
                *state = LoadState::from_result(outcome.result);
                true
            }
            (ViewLoad::Verses(outcome), _) => {
                tracing::debug!(mount = outcome.mount.get(), "Dropping stale verse load");
                false
            }
            (ViewLoad::Heresies(outcome), _) => {
                tracing::debug!(mount = outcome.mount.get(), "Dropping stale heresies load");
                false
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> &MountedView {
        &self.view
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    #[must_use]
    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// The verse document, when the verse view is mounted and loaded.
    #[must_use]
    pub fn verses(&self) -> Option<&VerseCheatsheet> {
        match &self.view {
            MountedView::Verses(state) => state.ready(),
            MountedView::Heresies(_) => None,
        }
    }

    #[must_use]
    pub fn heresies(&self) -> Option<&HeresiesChecklist> {
        match &self.view {
            MountedView::Heresies(state) => state.ready(),
            MountedView::Verses(_) => None,
        }
    }

    #[must_use]
    pub fn source_description(&self) -> String {
        self.loader.source().describe()
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.as_str(), "Theme toggled");
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    // ------------------------------------------------------------------
    // Accordion
    // ------------------------------------------------------------------

    #[must_use]
    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    #[must_use]
    pub fn expanded_section(&self) -> Option<&str> {
        self.accordion.expanded()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn section_count(&self) -> usize {
        self.verses().map_or(0, |doc| doc.categories.len())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.section_count();
        if count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
        self.scroll_request = ScrollRequest::Follow(self.cursor);
    }

    /// Toggle the section under the cursor.
    pub fn toggle_section(&mut self) {
        let Some(name) = self
            .verses()
            .and_then(|doc| doc.categories.get(self.cursor))
            .map(|c| c.name.clone())
        else {
            return;
        };
        if self.accordion.toggle(&name) {
            self.scroll_request = ScrollRequest::Reveal(self.cursor);
        } else {
            self.scroll_request = ScrollRequest::Follow(self.cursor);
        }
    }

    /// Expand the named section. Returns `false` if no such section is loaded.
    pub fn expand_section(&mut self, name: &str) -> bool {
        let Some(index) = self.verses().and_then(|doc| doc.position(name)) else {
            return false;
        };
        self.cursor = index;
        self.accordion.expand(name);
        self.scroll_request = ScrollRequest::Reveal(index);
        true
    }

    pub fn collapse_all(&mut self) {
        self.accordion.collapse();
        self.scroll_request = ScrollRequest::Follow(self.cursor);
    }

    // ------------------------------------------------------------------
    // Scroll
    // ------------------------------------------------------------------

    #[must_use]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scroll.offset() > SCROLLED_THRESHOLD
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll.scroll_by(delta);
    }

    /// Scroll by one viewport, keeping two lines of overlap.
    pub fn scroll_page(&mut self, down: bool) {
        let page = i32::from(self.viewport_height.saturating_sub(2).max(1));
        self.scroll.scroll_by(if down { page } else { -page });
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.to_bottom();
    }

    /// Called by the renderer with the content height it just laid out.
    pub fn set_scroll_max(&mut self, max: u16) {
        self.scroll.set_max(max);
    }

    pub fn set_scroll_offset(&mut self, offset: u16) {
        self.scroll.set_offset(offset);
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
    }

    pub fn take_scroll_request(&mut self) -> ScrollRequest {
        std::mem::take(&mut self.scroll_request)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Advance animation state (spinner).
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests;
