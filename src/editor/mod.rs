//! The editing core: a positional character buffer with linear undo/redo.
//!
//! [`Buffer`] holds the document, [`History`] logs the inverse of every edit,
//! and [`Session`] ties the two together behind the operation API the menu
//! loop calls into.

mod buffer;
mod error;
mod history;
mod session;

pub use buffer::Buffer;
pub use error::EditError;
pub use history::{EditKind, History, HistoryEntry, RedoPolicy};
pub use session::Session;
