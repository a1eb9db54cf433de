//! UI state types for the reader.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod accordion;
mod route;
mod scroll;
mod theme;

pub use accordion::Accordion;
pub use route::Route;
pub use scroll::{ScrollRequest, ScrollState};
pub use theme::{ThemeMode, ThemePreference};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and spinners.
    pub ascii_only: bool,
}
