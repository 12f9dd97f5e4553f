//! Moderation gate module
//!
//! The gate screens text before it is persisted. Providers live in
//! `cb-integration`; this module only defines the contract and the verdict.

mod verdict;

pub use verdict::{CategorySeverity, Verdict};

use crate::error::Result;
use async_trait::async_trait;

/// Content moderation check.
///
/// Implementations perform no retries; a failed check surfaces as
/// [`BoardError::ModerationUnavailable`](crate::BoardError::ModerationUnavailable).
#[async_trait]
pub trait ModerationGate: Send + Sync {
    /// Analyze a piece of text and return a fresh verdict
    async fn analyze(&self, text: &str) -> Result<Verdict>;
}
