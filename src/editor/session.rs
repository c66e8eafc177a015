use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::editor::{Buffer, EditError, History, RedoPolicy};

/// One editing session: the document, its undo log and the edit counter.
///
/// All user-facing operations go through here so that every successful edit
/// is logged exactly once and undo/redo replays are never logged as edits.
#[derive(Debug, Clone, Default)]
pub struct Session {
    buffer: Buffer,
    history: History,
    policy: RedoPolicy,
    changes: usize,
}

impl Session {
    /// Create an empty session with the default redo policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with a specific redo policy.
    pub fn with_policy(policy: RedoPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub const fn history(&self) -> &History {
        &self.history
    }

    pub const fn policy(&self) -> RedoPolicy {
        self.policy
    }

    /// Number of successful user edits made in this session.
    pub const fn changes(&self) -> usize {
        self.changes
    }

    /// The current contents in document order.
    pub fn contents(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// The current contents rendered as text.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Insert `ch` at `position` and log it for undo.
    ///
    /// # Errors
    /// [`EditError::InvalidPosition`] if `position` is past the end.
    pub fn insert(&mut self, position: usize, ch: u8) -> Result<(), EditError> {
        self.buffer.insert(position, ch)?;
        self.history.record_insert(position, ch);
        self.after_edit();
        debug!(position, ch = %char::from(ch), "insert");
        Ok(())
    }

    /// Delete the character at `position`, log it for undo and return it.
    ///
    /// # Errors
    /// [`EditError::EmptyBuffer`] or [`EditError::InvalidPosition`].
    pub fn delete(&mut self, position: usize) -> Result<u8, EditError> {
        let ch = self.buffer.delete(position)?;
        self.history.record_delete(position, ch);
        self.after_edit();
        debug!(position, ch = %char::from(ch), "delete");
        Ok(ch)
    }

    /// Undo the most recent edit.
    ///
    /// # Errors
    /// See [`History::undo`].
    pub fn undo(&mut self) -> Result<(), EditError> {
        self.history.undo(&mut self.buffer)
    }

    /// Redo the most recently undone edit.
    ///
    /// # Errors
    /// See [`History::redo`].
    pub fn redo(&mut self) -> Result<(), EditError> {
        self.history.redo(&mut self.buffer)
    }

    /// Write the buffer to `path`, replacing any existing file.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    /// [`EditError::FileOpen`] if the file cannot be created, or
    /// [`EditError::FileWrite`] if writing fails part way.
    pub fn save(&self, path: &Path) -> Result<usize, EditError> {
        let mut file = File::create(path).map_err(|source| EditError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.buffer
            .write_to(&mut file)
            .map_err(|source| EditError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), bytes = self.buffer.len(), "saved buffer");
        Ok(self.buffer.len())
    }

    fn after_edit(&mut self) {
        if self.policy == RedoPolicy::Clear {
            self.history.clear_redo();
        }
        self.changes += 1;
    }
}
