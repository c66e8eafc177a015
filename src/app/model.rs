use crate::editor::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A line of feedback produced by an update, shown once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The document and its undo/redo history
    pub session: Session,
    /// Whether the numbered menu is hidden
    pub quiet: bool,
    /// Set once the user has asked to exit
    pub should_quit: bool,
    notices: Vec<Notice>,
}

impl Model {
    pub const fn new(session: Session, quiet: bool) -> Self {
        Self {
            session,
            quiet,
            should_quit: false,
            notices: Vec::new(),
        }
    }

    pub fn show_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push(Notice {
            level,
            text: text.into(),
        });
    }

    /// Notices queued since the last drain.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
