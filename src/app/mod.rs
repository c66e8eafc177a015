//! Interactive menu loop.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`Model`]: the editing session plus pending notices
//! - [`Message`]: every menu action the user can pick
//! - [`update`]: pure function for state transitions
//! - [`App::run`]: prompt, update, apply side effects, print

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, Notice, NoticeLevel};
pub use update::{Message, update};

use crate::editor::RedoPolicy;

/// Owns the loop settings and drives a session over a pair of streams.
#[derive(Debug, Clone, Default)]
pub struct App {
    redo_policy: RedoPolicy,
    quiet: bool,
}

impl App {
    /// Create an app with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose what a fresh edit does to the redo history.
    pub const fn with_redo_policy(mut self, policy: RedoPolicy) -> Self {
        self.redo_policy = policy;
        self
    }

    /// Skip printing the numbered menu before every prompt.
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
