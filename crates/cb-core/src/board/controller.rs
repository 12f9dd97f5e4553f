//! Comment lifecycle controller

use super::alert::Alert;
use super::busy::BusyFlag;
use super::state::BoardState;
use crate::comment::CommentStore;
use crate::moderation::ModerationGate;
use crate::types::CommentId;
use std::sync::Arc;
use tracing::{debug, warn};

const LOAD_FAILED: &str = "Failed to load comments.";
const ADD_FAILED: &str = "Failed to add comment.";
const EDIT_FAILED: &str = "Failed to process comment.";
const DELETED_EMPTY: &str = "Comment deleted because it was empty.";
const UPDATED: &str = "Comment updated successfully.";

/// Result of one controller action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transition ran to completion
    Applied,
    /// Moderation rejected the text, nothing was persisted
    Blocked,
    /// A store or gate call failed
    Failed,
    /// Entry guard not met (busy, wrong mode, blank draft, unknown id)
    Ignored,
}

/// Drives the comment board: owns the view state and serializes every
/// store and gate round trip through a busy flag.
pub struct BoardController {
    store: Arc<dyn CommentStore>,
    gate: Arc<dyn ModerationGate>,
    state: BoardState,
    busy: BusyFlag,
}

impl BoardController {
    /// Create a controller over the given store and gate
    pub fn new(store: Arc<dyn CommentStore>, gate: Arc<dyn ModerationGate>) -> Self {
        Self {
            store,
            gate,
            state: BoardState::new(),
            busy: BusyFlag::new(),
        }
    }

    /// Current view state
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Handle on the busy flag, for observers
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Replace the draft text. Rejected while an operation is in flight.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        if self.is_busy() {
            return false;
        }
        self.state.draft = text.into();
        true
    }

    pub fn dismiss_alert(&mut self) {
        self.state.alert = None;
    }

    /// Fetch all comments from the store into the local cache
    pub async fn load(&mut self) -> Outcome {
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        match self.store.get_all().await {
            Ok(comments) => {
                debug!("Loaded {} comments", comments.len());
                self.state.comments = comments;
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to load comments: {}", e);
                self.state.set_alert(Alert::error(LOAD_FAILED));
                Outcome::Failed
            }
        }
    }

    /// Submit the draft: save the edit in edit mode, add otherwise
    pub async fn submit(&mut self) -> Outcome {
        if self.state.is_editing() {
            self.save_edit().await
        } else {
            self.add().await
        }
    }

    /// Screen the draft and, if safe, create a new comment from it
    pub async fn add(&mut self) -> Outcome {
        if self.state.is_editing() || self.state.draft.trim().is_empty() {
            return Outcome::Ignored;
        }
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        let draft = self.state.draft.clone();
        let verdict = match self.gate.analyze(&draft).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("Moderation failed while adding comment: {}", e);
                self.state.set_alert(Alert::error(ADD_FAILED));
                return Outcome::Failed;
            }
        };

        if !verdict.is_safe() {
            self.state.set_alert(Alert::warning(format!(
                "Inappropriate content detected in the following categories: {}",
                verdict.describe()
            )));
            return Outcome::Blocked;
        }

        match self.store.create(&draft).await {
            Ok(comment) => {
                self.state.comments.push(comment);
                self.state.draft.clear();
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to add comment: {}", e);
                self.state.set_alert(Alert::error(ADD_FAILED));
                Outcome::Failed
            }
        }
    }

    /// Enter edit mode for a cached comment, pre-filling the draft
    pub fn begin_edit(&mut self, id: CommentId) -> Outcome {
        if self.is_busy() {
            return Outcome::Ignored;
        }
        let Some(text) = self.state.get(id).map(|c| c.text.clone()) else {
            return Outcome::Ignored;
        };

        self.state.editing = Some(id);
        self.state.draft = text;
        Outcome::Applied
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) -> Outcome {
        if self.is_busy() || !self.state.is_editing() {
            return Outcome::Ignored;
        }
        self.state.exit_edit();
        Outcome::Applied
    }

    /// Persist the edit. An emptied draft deletes the comment instead.
    ///
    /// Edit mode is left and the draft discarded on every path, including
    /// a moderation block.
    pub async fn save_edit(&mut self) -> Outcome {
        let Some(id) = self.state.editing else {
            return Outcome::Ignored;
        };
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        let trimmed = self.state.draft.trim().to_string();
        let outcome = if trimmed.is_empty() {
            self.delete_emptied(id).await
        } else {
            self.update_screened(id, &trimmed).await
        };

        self.state.exit_edit();
        outcome
    }

    async fn delete_emptied(&mut self, id: CommentId) -> Outcome {
        match self.store.delete(id).await {
            Ok(()) => {
                self.state.remove(id);
                self.state.set_alert(Alert::info(DELETED_EMPTY));
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to delete emptied comment {}: {}", id, e);
                self.state.set_alert(Alert::error(EDIT_FAILED));
                Outcome::Failed
            }
        }
    }

    async fn update_screened(&mut self, id: CommentId, text: &str) -> Outcome {
        let verdict = match self.gate.analyze(text).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("Moderation failed while editing comment {}: {}", id, e);
                self.state.set_alert(Alert::error(EDIT_FAILED));
                return Outcome::Failed;
            }
        };

        if !verdict.is_safe() {
            self.state.set_alert(Alert::warning(format!(
                "Cannot save edit. Inappropriate content detected in the following categories: {}",
                verdict.describe()
            )));
            return Outcome::Blocked;
        }

        match self.store.update(id, text).await {
            Ok(comment) => {
                self.state.replace(comment);
                self.state.set_alert(Alert::success(UPDATED));
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to update comment {}: {}", id, e);
                self.state.set_alert(Alert::error(EDIT_FAILED));
                Outcome::Failed
            }
        }
    }

    /// Delete a comment. Failures are logged, not surfaced as an alert.
    pub async fn delete(&mut self, id: CommentId) -> Outcome {
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        match self.store.delete(id).await {
            Ok(()) => {
                self.state.remove(id);
                if self.state.editing == Some(id) {
                    self.state.exit_edit();
                }
                Outcome::Applied
            }
            Err(e) => {
                warn!("Failed to delete comment {}: {}", id, e);
                Outcome::Failed
            }
        }
    }
}
