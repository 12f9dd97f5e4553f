//! Board view state

use super::alert::Alert;
use crate::comment::Comment;
use crate::types::CommentId;

/// Whether the draft targets a new comment or an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMode {
    Composing,
    Editing(CommentId),
}

/// Local view state held by the controller
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// Cached comments, synchronized after each successful store call
    pub comments: Vec<Comment>,
    /// In-progress input text
    pub draft: String,
    /// Comment being edited
    pub editing: Option<CommentId>,
    /// Last outcome shown to the user
    pub alert: Option<Alert>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> BoardMode {
        match self.editing {
            Some(id) => BoardMode::Editing(id),
            None => BoardMode::Composing,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Find a cached comment
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub(super) fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub(super) fn replace(&mut self, comment: Comment) {
        if let Some(slot) = self.comments.iter_mut().find(|c| c.id == comment.id) {
            *slot = comment;
        }
    }

    pub(super) fn remove(&mut self, id: CommentId) {
        self.comments.retain(|c| c.id != id);
    }

    pub(super) fn exit_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }
}
