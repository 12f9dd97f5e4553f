//! Serve command
//!
//! Run the HTTP comment service over an in-memory store.

use anyhow::{Context, Result};
use cb_core::comment::{CommentStore, MemoryStore};
use cb_core::config::Config;
use clap::Args;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overrides [server].bind
    #[arg(long, short)]
    pub bind: Option<String>,
}

/// Execute the serve command
pub fn execute(args: ServeArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let runtime = super::build_runtime()?;

    runtime.block_on(async {
        let listener = TcpListener::bind(&bind)
            .await
            .with_context(|| format!("Failed to bind {}", bind))?;
        let addr = listener.local_addr()?;
        info!("Comment service listening on {}", addr);
        println!(
            "{} Serving comments on {}",
            "✓".green(),
            format!("http://{}", addr).cyan()
        );

        let store: Arc<dyn CommentStore> = Arc::new(MemoryStore::new());
        cb_server::serve(listener, store)
            .await
            .context("Comment service stopped")
    })
}
