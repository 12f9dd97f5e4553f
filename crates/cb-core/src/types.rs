//! Core type definitions for comment-board

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a comment
///
/// Assigned by the store at creation; strictly increasing within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl CommentId {
    /// The first id handed out by a fresh store
    pub const FIRST: Self = Self(1);

    /// Get the raw value
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CommentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(CommentId)
    }
}

impl From<u64> for CommentId {
    fn from(value: u64) -> Self {
        CommentId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_parse() {
        assert_eq!("42".parse::<CommentId>().unwrap(), CommentId(42));
        assert_eq!(" 3 ".parse::<CommentId>().unwrap(), CommentId(3));
        assert!("abc".parse::<CommentId>().is_err());
        assert!("-1".parse::<CommentId>().is_err());
    }

    #[test]
    fn test_comment_id_ordering() {
        assert!(CommentId::FIRST < CommentId::FIRST.next());
        assert_eq!(CommentId::FIRST.next().get(), 2);
    }

    #[test]
    fn test_comment_id_serializes_as_number() {
        let json = serde_json::to_string(&CommentId(5)).unwrap();
        assert_eq!(json, "5");
        let id: CommentId = serde_json::from_str("9").unwrap();
        assert_eq!(id, CommentId(9));
    }
}
