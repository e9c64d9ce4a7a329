// crates/punishment-bridge-listeners/src/caller/mod.rs
// ============================================================================
// Module: Host Update Channels
// Description: Reference implementations of the host update channel.
// Purpose: Deliver player-changed signals to a closure or an async consumer.
// Dependencies: punishment-bridge-core, tokio
// ============================================================================

//! ## Overview
//! Implementations of [`punishment_bridge_core::Caller`] for embedding hosts
//! that either handle updates inline or drain them from a channel.
//! Invariants:
//! - A successful call delivers exactly one update.

// ============================================================================
// SECTION: Imports
// ============================================================================

use punishment_bridge_core::PlayerId;
use punishment_bridge_core::PlayerName;

// ============================================================================
// SECTION: Update Message
// ============================================================================

/// Player update emitted by channel-based callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUpdate {
    /// Host identifier, when known.
    pub player_id: Option<PlayerId>,
    /// Player name.
    pub player_name: PlayerName,
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod callback;
pub mod channel;

pub use callback::CallbackCaller;
pub use channel::ChannelCaller;
