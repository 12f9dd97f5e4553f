//! Comment data models

use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user-authored comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Comment text
    pub text: String,
    /// When the comment was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the comment was last edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Create a comment stamped with the current time
    pub fn new(id: CommentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    /// Replace the text and refresh updated_at
    pub fn update_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.updated_at = Some(Utc::now());
    }

    /// Whether the comment has been edited since creation
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentBody {
    pub text: String,
}

impl CommentBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new(CommentId(1), "hello");
        assert_eq!(comment.text, "hello");
        assert!(comment.created_at.is_some());
        assert!(!comment.is_edited());
    }

    #[test]
    fn test_comment_update() {
        let mut comment = Comment::new(CommentId(1), "hello");
        comment.update_text("hello again");
        assert_eq!(comment.text, "hello again");
        assert!(comment.is_edited());
        assert!(comment.updated_at >= comment.created_at);
    }

    #[test]
    fn test_json_shape() {
        let comment = Comment::new(CommentId(3), "hi");
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["text"], "hi");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_timestamps_optional_on_input() {
        let comment: Comment = serde_json::from_str(r#"{"id": 1700000000000, "text": "legacy"}"#).unwrap();
        assert_eq!(comment.id, CommentId(1_700_000_000_000));
        assert!(comment.created_at.is_none());
        assert!(comment.updated_at.is_none());
    }
}
