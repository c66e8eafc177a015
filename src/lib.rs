// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditError)
    clippy::module_name_repetitions
)]

//! # Jotter
//!
//! A tiny in-memory text buffer editor with linear undo and redo.
//!
//! Jotter edits a single sequence of one-byte characters:
//! - Insert or delete a character at a zero-based position
//! - Undo and redo edits, one at a time
//! - Display the text or save it as a raw byte file
//!
//! ## Architecture
//!
//! The interactive loop uses The Elm Architecture (TEA) pattern:
//! - **Model**: The editing session and pending notices
//! - **Message**: Menu actions
//! - **Update**: Pure state transitions
//! - **View**: Notices printed after each step
//!
//! ## Modules
//!
//! - [`editor`]: Buffer, undo/redo history and the editing session
//! - [`app`]: Menu loop and state
//! - [`config`]: Saved defaults and flag parsing

pub mod app;
pub mod config;
pub mod editor;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{EditError, RedoPolicy, Session};
}
