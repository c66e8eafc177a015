use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by buffer, history and session operations.
///
/// None of these are fatal; callers report them and carry on.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("Invalid position {position} (buffer length is {len})")]
    InvalidPosition { position: i64, len: usize },

    #[error("Nothing to delete: buffer is empty")]
    EmptyBuffer,

    #[error("No actions to undo")]
    NothingToUndo,

    #[error("No actions to redo")]
    NothingToRedo,

    #[error("Unable to open {} for writing: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditError {
    /// Out-of-range error for an unsigned buffer index.
    pub(crate) fn invalid_position(position: usize, len: usize) -> Self {
        Self::InvalidPosition {
            position: i64::try_from(position).unwrap_or(i64::MAX),
            len,
        }
    }
}
