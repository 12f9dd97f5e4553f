//! cb-integration - Moderation provider integrations for comment-board
//!
//! ## Providers
//!
//! - Azure AI Content Safety ([`ContentSafetyGate`])
//! - Local term list for offline development ([`BlocklistGate`])
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cb_core::config::Config;
//! use cb_integration::build_gate;
//!
//! let config = Config::load_or_default(None)?;
//! let gate = build_gate(&config.moderation)?;
//! let verdict = gate.analyze("hello").await?;
//! ```

pub mod gate;

pub use gate::blocklist::BlocklistGate;
pub use gate::content_safety::ContentSafetyGate;
pub use gate::build_gate;
