//! cb-storage - Storage library for comment-board
//!
//! This crate provides comment store implementations that live outside the
//! process. The in-process store is `cb_core::comment::MemoryStore`.

mod http_store;

pub use http_store::HttpCommentStore;
