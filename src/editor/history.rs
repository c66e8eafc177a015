use tracing::debug;

use crate::editor::{Buffer, EditError};

/// The action a history entry performs when replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

/// One reversible edit.
///
/// Entries on the undo stack hold the action that reverses the logged edit;
/// entries on the redo stack hold the action that performs it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: EditKind,
    pub ch: u8,
    pub position: usize,
}

impl HistoryEntry {
    /// The entry that undoes this one.
    pub const fn inverse(self) -> Self {
        let kind = match self.kind {
            EditKind::Insert => EditKind::Delete,
            EditKind::Delete => EditKind::Insert,
        };
        Self { kind, ..self }
    }

    /// Apply to `buffer` and return the entry as it actually took effect.
    ///
    /// A delete carries the character really removed, which differs from the
    /// logged one only when a stale redo entry is replayed.
    fn apply(self, buffer: &mut Buffer) -> Result<Self, EditError> {
        match self.kind {
            EditKind::Insert => {
                buffer.insert(self.position, self.ch)?;
                Ok(self)
            }
            EditKind::Delete => {
                let removed = buffer.delete(self.position)?;
                if removed != self.ch {
                    debug!(
                        position = self.position,
                        expected = %char::from(self.ch),
                        found = %char::from(removed),
                        "replayed delete removed a different character"
                    );
                }
                Ok(Self { ch: removed, ..self })
            }
        }
    }
}

/// What happens to the redo stack when the user makes a fresh edit.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RedoPolicy {
    /// Discard redo history on every new edit.
    #[default]
    Clear,
    /// Keep redo history across new edits.
    Keep,
}

/// Linear undo/redo log built from two stacks of inverse actions.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
}

impl History {
    pub const fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Log an insert of `ch` at `position`; undoing it deletes there.
    pub fn record_insert(&mut self, position: usize, ch: u8) {
        self.undo.push(HistoryEntry {
            kind: EditKind::Delete,
            ch,
            position,
        });
    }

    /// Log a delete of `ch` from `position`; undoing it re-inserts it.
    pub fn record_delete(&mut self, position: usize, ch: u8) {
        self.undo.push(HistoryEntry {
            kind: EditKind::Insert,
            ch,
            position,
        });
    }

    /// Reverse the most recent edit.
    ///
    /// # Errors
    /// [`EditError::NothingToUndo`] if the undo stack is empty, or the buffer
    /// error if the entry cannot be applied. On error neither the buffer nor
    /// the stacks change.
    pub fn undo(&mut self, buffer: &mut Buffer) -> Result<(), EditError> {
        let entry = self.undo.pop().ok_or(EditError::NothingToUndo)?;
        let applied = match entry.apply(buffer) {
            Ok(applied) => applied,
            Err(err) => {
                self.undo.push(entry);
                return Err(err);
            }
        };
        debug!(kind = ?applied.kind, position = applied.position, "undo applied");
        self.redo.push(applied.inverse());
        Ok(())
    }

    /// Re-apply the most recently undone edit.
    ///
    /// # Errors
    /// [`EditError::NothingToRedo`] if the redo stack is empty, or the buffer
    /// error if the entry cannot be applied. On error neither the buffer nor
    /// the stacks change.
    pub fn redo(&mut self, buffer: &mut Buffer) -> Result<(), EditError> {
        let entry = self.redo.pop().ok_or(EditError::NothingToRedo)?;
        let applied = match entry.apply(buffer) {
            Ok(applied) => applied,
            Err(err) => {
                self.redo.push(entry);
                return Err(err);
            }
        };
        debug!(kind = ?applied.kind, position = applied.position, "redo applied");
        self.undo.push(applied.inverse());
        Ok(())
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The entry the next undo would apply.
    pub fn peek_undo(&self) -> Option<&HistoryEntry> {
        self.undo.last()
    }

    /// The entry the next redo would apply.
    pub fn peek_redo(&self) -> Option<&HistoryEntry> {
        self.redo.last()
    }
}
