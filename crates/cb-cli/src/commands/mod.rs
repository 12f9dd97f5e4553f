//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod board;
pub mod comments;
pub mod config;
pub mod serve;

use anyhow::{Context, Result};
use cb_core::board::BoardController;
use cb_core::config::Config;
use cb_integration::BlocklistGate;
use cb_storage::HttpCommentStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// comment-board - moderated comment board
#[derive(Debug, Parser)]
#[command(name = "comment-board")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Content Safety subscription key, overrides the config file
    #[arg(
        long,
        global = true,
        env = "COMMENT_BOARD_CONTENT_SAFETY_KEY",
        hide_env_values = true
    )]
    pub content_safety_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP comment service
    Serve(serve::ServeArgs),

    /// Open the interactive terminal board
    Board(board::BoardArgs),

    /// Scripted comment actions
    Comments(comments::CommentsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(key) = cli.content_safety_key {
        config.moderation.api_key = Some(key);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Serve(args) => serve::execute(args, &config),
        Commands::Board(args) => board::execute(args, &config),
        Commands::Comments(args) => comments::execute(args, &config),
        Commands::Config(cmd) => config::execute(cmd, &config, &config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn build_store(config: &Config, store_url: Option<&str>) -> Result<HttpCommentStore> {
    let url = store_url.unwrap_or(&config.store.url);
    HttpCommentStore::new(url, config.store.timeout())
        .with_context(|| format!("Invalid store URL: {}", url))
}

/// Wire a controller to the remote store and the configured moderation gate
pub(crate) fn build_controller(config: &Config, store_url: Option<&str>) -> Result<BoardController> {
    let store = build_store(config, store_url)?;
    let gate = cb_integration::build_gate(&config.moderation)
        .context("Failed to set up moderation")?;
    Ok(BoardController::new(Arc::new(store), gate))
}

/// Controller for actions that never screen text (list, delete).
///
/// Moderation credentials are not required; the empty blocklist is never consulted.
pub(crate) fn build_unscreened_controller(
    config: &Config,
    store_url: Option<&str>,
) -> Result<BoardController> {
    let store = build_store(config, store_url)?;
    Ok(BoardController::new(
        Arc::new(store),
        Arc::new(BlocklistGate::default()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_parse_comments_edit() {
        let cli = Cli::try_parse_from(["comment-board", "comments", "edit", "3", "new text"]).unwrap();
        match cli.command {
            Commands::Comments(args) => match args.action {
                comments::CommentsAction::Edit { id, text } => {
                    assert_eq!(id.get(), 3);
                    assert_eq!(text, "new text");
                }
                other => panic!("unexpected action: {:?}", other),
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["comment-board", "comments", "delete", "abc"]).is_err());
    }

    #[test]
    fn test_build_controller_with_blocklist() {
        let mut config = Config::default();
        config.moderation.provider = cb_core::config::ModerationProvider::Blocklist;
        let controller = build_controller(&config, Some("http://127.0.0.1:9")).unwrap();
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_build_controller_needs_content_safety_key() {
        let config = Config::default();
        assert!(build_controller(&config, None).is_err());
    }

    #[test]
    fn test_unscreened_controller_needs_no_key() {
        let config = Config::default();
        assert!(build_unscreened_controller(&config, None).is_ok());
    }
}
