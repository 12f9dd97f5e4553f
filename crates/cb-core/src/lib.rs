//! cb-core - Core library for comment-board
//!
//! This crate provides the core business logic for the comment board,
//! including the comment model, the store contract, the moderation gate
//! contract and the comment lifecycle controller that drives the UI.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod moderation;
pub mod board;

pub use error::{BoardError, Result};
pub use types::*;
