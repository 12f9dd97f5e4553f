//! Comments command
//!
//! Scripted board actions. Each one goes through the lifecycle controller,
//! so moderation applies exactly as it does in the terminal board.

use anyhow::{bail, Result};
use cb_core::board::{AlertKind, BoardController, Outcome};
use cb_core::config::Config;
use cb_core::CommentId;
use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Arguments for the comments command
#[derive(Debug, Args)]
pub struct CommentsArgs {
    /// Comment service URL, overrides [store].url
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    #[command(subcommand)]
    pub action: CommentsAction,
}

/// Comment actions
#[derive(Debug, Subcommand)]
pub enum CommentsAction {
    /// List all comments
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new comment
    Add {
        /// Comment text
        text: String,
    },

    /// Replace the text of a comment; empty text deletes it
    Edit {
        /// Comment id
        id: CommentId,
        /// New text
        text: String,
    },

    /// Delete a comment
    Delete {
        /// Comment id
        id: CommentId,
        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Execute the comments command
pub fn execute(args: CommentsArgs, config: &Config) -> Result<()> {
    let runtime = super::build_runtime()?;
    let store_url = args.store_url.as_deref();
    let mut board = match args.action {
        CommentsAction::List { .. } | CommentsAction::Delete { .. } => {
            super::build_unscreened_controller(config, store_url)?
        }
        CommentsAction::Add { .. } | CommentsAction::Edit { .. } => {
            super::build_controller(config, store_url)?
        }
    };

    match args.action {
        CommentsAction::List { json } => list(&runtime, &mut board, json),
        CommentsAction::Add { text } => add(&runtime, &mut board, text),
        CommentsAction::Edit { id, text } => edit(&runtime, &mut board, id, text),
        CommentsAction::Delete { id, yes } => delete(&runtime, &mut board, id, yes),
    }
}

/// Drive a controller future while showing a spinner
fn with_spinner<F: Future>(runtime: &Runtime, message: &str, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let output = runtime.block_on(fut);
    spinner.finish_and_clear();
    output
}

fn load(runtime: &Runtime, board: &mut BoardController) -> Result<()> {
    if with_spinner(runtime, "Loading comments...", board.load()) != Outcome::Applied {
        bail!("{}", alert_message(board));
    }
    Ok(())
}

fn list(runtime: &Runtime, board: &mut BoardController, json: bool) -> Result<()> {
    use colored::Colorize;

    load(runtime, board)?;
    let comments = &board.state().comments;

    if json {
        println!("{}", serde_json::to_string_pretty(comments)?);
        return Ok(());
    }

    if comments.is_empty() {
        println!("{}", "No comments.".dimmed());
        return Ok(());
    }

    for comment in comments {
        let created = comment
            .created_at
            .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let edited = if comment.is_edited() { " (edited)" } else { "" };
        println!(
            "{} {}{}  {}",
            format!("#{}", comment.id).cyan(),
            comment.text,
            edited.dimmed(),
            created.dimmed()
        );
    }
    Ok(())
}

fn add(runtime: &Runtime, board: &mut BoardController, text: String) -> Result<()> {
    use colored::Colorize;

    if text.trim().is_empty() {
        bail!("Comment text is empty");
    }
    board.set_draft(text);

    match with_spinner(runtime, "Screening comment...", board.add()) {
        Outcome::Applied => {
            if let Some(comment) = board.state().comments.last() {
                println!("{} Added comment #{}", "✓".green(), comment.id);
            }
            Ok(())
        }
        _ => bail!("{}", alert_message(board)),
    }
}

fn edit(runtime: &Runtime, board: &mut BoardController, id: CommentId, text: String) -> Result<()> {
    load(runtime, board)?;
    if board.begin_edit(id) != Outcome::Applied {
        bail!("Comment #{} not found", id);
    }
    board.set_draft(text);

    let outcome = with_spinner(runtime, "Saving edit...", board.save_edit());
    report(board, outcome)
}

fn delete(runtime: &Runtime, board: &mut BoardController, id: CommentId, yes: bool) -> Result<()> {
    use colored::Colorize;

    if !yes {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Delete comment #{}?", id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Delete cancelled.");
            return Ok(());
        }
    }

    match with_spinner(runtime, "Deleting comment...", board.delete(id)) {
        Outcome::Applied => {
            println!("{} Deleted comment #{}", "✓".green(), id);
            Ok(())
        }
        _ => bail!("Failed to delete comment #{}", id),
    }
}

/// Print a success or info alert, turn anything else into an error
fn report(board: &BoardController, outcome: Outcome) -> Result<()> {
    use colored::Colorize;

    let alert = board.state().alert.as_ref();
    match (outcome, alert) {
        (Outcome::Applied, Some(alert)) => {
            let mark = match alert.kind {
                AlertKind::Info => "ℹ".blue(),
                _ => "✓".green(),
            };
            println!("{} {}", mark, alert.message);
            Ok(())
        }
        (Outcome::Applied, None) => Ok(()),
        _ => bail!("{}", alert_message(board)),
    }
}

fn alert_message(board: &BoardController) -> String {
    board
        .state()
        .alert
        .as_ref()
        .map(|a| a.message.clone())
        .unwrap_or_else(|| "Operation did not complete".to_string())
}
