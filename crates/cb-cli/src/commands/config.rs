//! Config command
//!
//! Manage comment-board configuration.

use anyhow::{Context, Result};
use cb_core::config::Config;
use clap::Subcommand;
use std::path::Path;

const MASKED: &str = "********";

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config: &Config, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config, path, json),
        ConfigCommand::Init { force } => init_config(path, force),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn show_config(config: &Config, path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let mut shown = config.clone();
    if shown.moderation.api_key.is_some() {
        shown.moderation.api_key = Some(MASKED.to_string());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if path.exists() {
        println!("{}", path.display().to_string().dimmed());
    } else {
        println!("{}", format!("{} (not found, using defaults)", path.display()).dimmed());
    }
    println!();
    println!("{}", shown.to_toml()?);
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if path.exists() && !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Init cancelled.");
            return Ok(());
        }
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Wrote default configuration to {}", "✓".green(), path.display());
    Ok(())
}
