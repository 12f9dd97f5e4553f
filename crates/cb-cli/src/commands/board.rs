//! Board command
//!
//! Open the interactive terminal board.

use anyhow::Result;
use cb_core::config::Config;
use cb_ui::App;
use clap::Args;
use tracing::info;

/// Arguments for the board command
#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Comment service URL, overrides [store].url
    #[arg(long)]
    pub store_url: Option<String>,
}

/// Execute the board command
pub fn execute(args: BoardArgs, config: &Config) -> Result<()> {
    let runtime = super::build_runtime()?;
    let board = super::build_controller(config, args.store_url.as_deref())?;
    info!(
        "Opening board against {}",
        args.store_url.as_deref().unwrap_or(&config.store.url)
    );

    let mut app = App::new(board, runtime.handle().clone())?;
    app.run()
}
