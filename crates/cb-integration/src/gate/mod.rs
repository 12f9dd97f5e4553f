//! Moderation gate implementations

pub mod blocklist;
pub mod content_safety;

use cb_core::config::{ModerationConfig, ModerationProvider};
use cb_core::error::Result;
use cb_core::moderation::ModerationGate;
use std::sync::Arc;
use tracing::debug;

/// Build the gate selected by configuration
pub fn build_gate(config: &ModerationConfig) -> Result<Arc<dyn ModerationGate>> {
    debug!("Using moderation provider {:?}", config.provider);
    match config.provider {
        ModerationProvider::ContentSafety => {
            Ok(Arc::new(content_safety::ContentSafetyGate::from_config(config)?))
        }
        ModerationProvider::Blocklist => Ok(Arc::new(blocklist::BlocklistGate::new(
            config.blocklist.iter().cloned(),
        ))),
    }
}
