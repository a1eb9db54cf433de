//! Core domain types for the cheatsheet reader.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The two content documents, their shape validation, and the UI state types shared by
//! the engine and the renderer all live here.

mod document;
mod heresies;
mod sanitize;
pub mod ui;
mod verses;

pub use document::{Document, DocumentError, parse_document};
pub use heresies::{HeresiesChecklist, Heresy};
pub use sanitize::sanitize_terminal_text;
pub use verses::{Category, CategoryBody, Subcategory, Verse, VerseCheatsheet};
