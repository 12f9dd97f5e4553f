//! In-memory comment store

use super::model::Comment;
use super::store::CommentStore;
use crate::error::{BoardError, Result};
use crate::types::CommentId;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

struct Inner {
    comments: Vec<Comment>,
    next_id: CommentId,
}

/// Comment store backed by a process-local list.
///
/// Id allocation and list mutation happen under one lock, so the store can be
/// shared by any number of callers.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                comments: Vec::new(),
                next_id: CommentId::FIRST,
            }),
        }
    }

    /// Number of stored comments
    pub async fn len(&self) -> usize {
        self.inner.lock().await.comments.len()
    }

    /// Check if empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Comment>> {
        Ok(self.inner.lock().await.comments.clone())
    }

    async fn create(&self, text: &str) -> Result<Comment> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id = id.next();

        let comment = Comment::new(id, text);
        inner.comments.push(comment.clone());
        debug!("Created comment {}", id);
        Ok(comment)
    }

    async fn update(&self, id: CommentId, text: &str) -> Result<Comment> {
        let mut inner = self.inner.lock().await;
        let comment = inner
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(BoardError::NotFound(id))?;

        comment.update_text(text);
        debug!("Updated comment {}", id);
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let pos = inner
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or(BoardError::NotFound(id))?;

        inner.comments.remove(pos);
        debug!("Deleted comment {}", id);
        Ok(())
    }
}
