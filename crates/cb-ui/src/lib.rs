//! cb-ui - TUI library for comment-board
//!
//! This crate provides the terminal presentation surface for the board.
//! It renders the [`BoardController`](cb_core::board::BoardController) state
//! and turns key presses into controller actions.
//!
//! # Example
//!
//! ```ignore
//! use cb_ui::App;
//!
//! let runtime = tokio::runtime::Runtime::new()?;
//! let mut app = App::new(board, runtime.handle().clone())?;
//! app.run()?;
//! ```

pub mod app;
pub mod theme;

pub use app::{App, AppMode, AppState, BoardView};
pub use theme::Theme;
