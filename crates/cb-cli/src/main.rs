//! comment-board - moderated comment board
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the comment service
//! comment-board serve --bind 127.0.0.1:3000
//!
//! # Open the terminal board against it
//! comment-board board
//!
//! # Scripted use
//! comment-board comments add "Nice work"
//! comment-board comments list --json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
