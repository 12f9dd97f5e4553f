//! Comment store trait

use super::model::Comment;
use crate::error::Result;
use crate::types::CommentId;
use async_trait::async_trait;

/// Authoritative owner of comment state.
///
/// Every call is one atomic operation against the backing collection and
/// returns independent copies. `update` and `delete` fail with
/// [`BoardError::NotFound`](crate::BoardError::NotFound) for unknown ids.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Snapshot of all comments in insertion order
    async fn get_all(&self) -> Result<Vec<Comment>>;

    /// Append a new comment. Text is stored as given, empty included.
    async fn create(&self, text: &str) -> Result<Comment>;

    /// Replace the text of an existing comment
    async fn update(&self, id: CommentId, text: &str) -> Result<Comment>;

    /// Remove a comment
    async fn delete(&self, id: CommentId) -> Result<()>;
}
