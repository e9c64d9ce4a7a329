// crates/punishment-bridge-listeners/src/caller/channel.rs
// ============================================================================
// Module: Channel Caller
// Description: Channel-based host update channel.
// Purpose: Send player updates through a Tokio mpsc channel.
// Dependencies: punishment-bridge-core, tokio
// ============================================================================

//! ## Overview
//! [`ChannelCaller`] enqueues a [`crate::caller::PlayerUpdate`] per call into a
//! bounded `tokio::sync::mpsc` channel without blocking the notifying thread.
//! Invariants:
//! - A full or closed channel is reported as [`CallerError::Rejected`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use punishment_bridge_core::Caller;
use punishment_bridge_core::CallerError;
use punishment_bridge_core::PlayerId;
use punishment_bridge_core::PlayerName;
use tokio::sync::mpsc::Sender;

use crate::caller::PlayerUpdate;

// ============================================================================
// SECTION: Channel Caller
// ============================================================================

/// Channel-based host update channel.
#[derive(Debug, Clone)]
pub struct ChannelCaller {
    /// Sender used to enqueue updates.
    sender: Sender<PlayerUpdate>,
}

impl ChannelCaller {
    /// Creates a caller over the sender.
    #[must_use]
    pub const fn new(sender: Sender<PlayerUpdate>) -> Self {
        Self {
            sender,
        }
    }
}

impl Caller for ChannelCaller {
    fn update_player_data(
        &self,
        player_id: Option<&PlayerId>,
        player_name: &PlayerName,
    ) -> Result<(), CallerError> {
        let update = PlayerUpdate {
            player_id: player_id.cloned(),
            player_name: player_name.clone(),
        };
        self.sender.try_send(update).map_err(|err| CallerError::Rejected(err.to_string()))
    }
}
