use tracing::warn;

use crate::app::{App, Message, Model, NoticeLevel};

impl App {
    pub(super) fn handle_message_side_effects(&self, model: &mut Model, msg: &Message) {
        if let Message::Save(path) = msg {
            match model.session.save(path) {
                Ok(_) => model.show_notice(NoticeLevel::Info, "File saved successfully."),
                Err(err) => {
                    warn!(path = %path.display(), %err, "save failed");
                    model.show_notice(NoticeLevel::Error, format!("Error: {err}"));
                }
            }
        }
    }
}
