//! Comment lifecycle module
//!
//! The [`BoardController`] owns the view state of a comment board and runs
//! every user action against the injected store and moderation gate.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cb_core::board::BoardController;
//! use cb_core::comment::MemoryStore;
//!
//! let mut board = BoardController::new(Arc::new(MemoryStore::new()), gate);
//! board.load().await;
//! board.set_draft("hello");
//! board.submit().await;
//! ```

mod alert;
mod busy;
mod controller;
mod state;

pub use alert::{Alert, AlertKind};
pub use busy::{BusyFlag, BusyGuard};
pub use controller::{BoardController, Outcome};
pub use state::{BoardMode, BoardState};
