//! Comment system module
//!
//! Holds the comment model, the store contract and the in-memory store.

pub mod model;
pub mod store;
pub mod memory;

pub use model::{Comment, CommentBody};
pub use store::CommentStore;
pub use memory::MemoryStore;
