// crates/punishment-bridge-listeners/src/caller/callback.rs
// ============================================================================
// Module: Callback Caller
// Description: Closure-backed host update channel.
// Purpose: Invoke a user-provided function for each player update.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! [`CallbackCaller`] forwards each update to a user-supplied function and
//! returns its result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use punishment_bridge_core::Caller;
use punishment_bridge_core::CallerError;
use punishment_bridge_core::PlayerId;
use punishment_bridge_core::PlayerName;

// ============================================================================
// SECTION: Callback Caller
// ============================================================================

/// Callback-based host update channel.
#[derive(Clone)]
pub struct CallbackCaller {
    /// Handler invoked with the player identity.
    handler: Arc<CallbackHandler>,
}

/// Callback handler signature used by the caller.
type CallbackHandler =
    dyn Fn(Option<&PlayerId>, &PlayerName) -> Result<(), CallerError> + Send + Sync;

impl CallbackCaller {
    /// Creates a caller from a handler function.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(Option<&PlayerId>, &PlayerName) -> Result<(), CallerError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }
}

impl Caller for CallbackCaller {
    fn update_player_data(
        &self,
        player_id: Option<&PlayerId>,
        player_name: &PlayerName,
    ) -> Result<(), CallerError> {
        (self.handler)(player_id, player_name)
    }
}
