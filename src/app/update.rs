use std::path::PathBuf;

use tracing::debug;

use crate::app::{Model, NoticeLevel};
use crate::editor::EditError;

/// Every action the menu can produce.
///
/// Positions stay signed here; range checking happens in [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Insert a character at a position
    Insert { position: i64, ch: u8 },
    /// Delete the character at a position
    Delete { position: i64 },
    /// Undo the last edit
    Undo,
    /// Redo the last undone edit
    Redo,
    /// Show the current text
    Display,
    /// Write the buffer to a file
    Save(PathBuf),
    /// Leave the editor
    Exit,
    /// The menu choice was not recognised
    InvalidChoice(String),
    /// An argument to a menu choice could not be parsed
    InvalidInput(String),
}

/// Pure function that updates the model based on a message.
///
/// Saving touches the filesystem, so [`Message::Save`] is left to the
/// side-effect handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Insert { position, ch } => {
            let result = checked_index(position, model.session.buffer().len())
                .and_then(|idx| model.session.insert(idx, ch));
            report(&mut model, "insert", result);
        }
        Message::Delete { position } => {
            let result = if model.session.buffer().is_empty() {
                Err(EditError::EmptyBuffer)
            } else {
                checked_index(position, model.session.buffer().len())
                    .and_then(|idx| model.session.delete(idx))
                    .map(|_| ())
            };
            report(&mut model, "delete", result);
        }
        Message::Undo => {
            let result = model.session.undo();
            report(&mut model, "undo", result);
        }
        Message::Redo => {
            let result = model.session.redo();
            report(&mut model, "redo", result);
        }
        Message::Display => {
            let text = format!("Current Text: {}", model.session.text());
            model.show_notice(NoticeLevel::Info, text);
        }
        Message::Save(_) => {}
        Message::Exit => {
            let text = format!(
                "Exiting editor. Total changes made: {}",
                model.session.changes()
            );
            model.show_notice(NoticeLevel::Info, text);
            model.should_quit = true;
        }
        Message::InvalidChoice(choice) => {
            debug!(%choice, "invalid menu choice");
            model.show_notice(NoticeLevel::Warning, "Invalid choice. Please try again.");
        }
        Message::InvalidInput(reason) => {
            model.show_notice(NoticeLevel::Warning, format!("Invalid input: {reason}"));
        }
    }
    model
}

fn checked_index(position: i64, len: usize) -> Result<usize, EditError> {
    usize::try_from(position).map_err(|_| EditError::InvalidPosition { position, len })
}

fn report(model: &mut Model, action: &str, result: Result<(), EditError>) {
    if let Err(err) = result {
        debug!(action, %err, "operation rejected");
        model.show_notice(NoticeLevel::Error, err.to_string());
    }
}
