// crates/punishment-bridge-listeners/src/adapter.rs
// ============================================================================
// Module: Listener Adapter Contract
// Description: Platform-neutral adapter trait and the shared change handler.
// Purpose: Forward punish/revoke notifications to the host update channel.
// Dependencies: punishment-bridge-core, thiserror
// ============================================================================

//! ## Overview
//! Every platform variant subscribes to its own notification stream but
//! routes each notification through one [`PunishmentChangeHandler`], so the
//! host observes identical behavior regardless of platform.
//! Invariants:
//! - Each notification produces exactly one host update call.
//! - Host update failures never escape the handler; they are audited and dropped.
//! - `register()` subscribes at most once per adapter.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use punishment_bridge_core::BridgeAuditEvent;
use punishment_bridge_core::BridgeAuditSink;
use punishment_bridge_core::Caller;
use punishment_bridge_core::NoopAuditSink;
use punishment_bridge_core::Platform;
use punishment_bridge_core::PunishmentChange;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors reported by a platform's subscribe call.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The host plugin handle is not loaded on the platform.
    #[error("host plugin not loaded: {0}")]
    PluginMissing(String),
    /// The platform refused the listener.
    #[error("listener registration failed: {0}")]
    RegistrationFailed(String),
}

/// Errors returned by [`ListenerAdapter::register`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    /// The platform subscribe call failed.
    #[error("platform subscribe failed: {0}")]
    Platform(#[from] PlatformError),
}

// ============================================================================
// SECTION: Adapter Trait
// ============================================================================

/// Platform listener adapter.
pub trait ListenerAdapter: Send + Sync {
    /// Returns the platform this adapter subscribes to.
    fn platform(&self) -> Platform;

    /// Subscribes to the platform's punish/revoke notifications.
    ///
    /// Calling this again after a successful registration is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] when the platform refuses the subscription.
    fn register(&self) -> Result<(), ListenerError>;

    /// Returns true once the adapter has subscribed.
    fn is_registered(&self) -> bool;
}

/// Host plugin handle a platform listener is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginHandle {
    /// Plugin name as known to the platform.
    pub name: String,
}

// ============================================================================
// SECTION: Registration Guard
// ============================================================================

/// Once-only registration latch shared by the platform adapters.
#[derive(Debug, Default)]
pub(crate) struct RegistrationLatch {
    /// Whether the subscribe call has succeeded.
    registered: Mutex<bool>,
}

impl RegistrationLatch {
    /// Runs `subscribe` unless a previous call already succeeded.
    pub(crate) fn register_once<F>(&self, subscribe: F) -> Result<(), ListenerError>
    where
        F: FnOnce() -> Result<(), PlatformError>,
    {
        let mut registered = self.registered.lock().unwrap_or_else(PoisonError::into_inner);
        if *registered {
            return Ok(());
        }
        subscribe()?;
        *registered = true;
        Ok(())
    }

    /// Returns true once registration has succeeded.
    pub(crate) fn is_registered(&self) -> bool {
        *self.registered.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// SECTION: Change Handler
// ============================================================================

/// Shared translation from a punishment change to a host update call.
pub struct PunishmentChangeHandler {
    /// Platform delivering notifications to this handler.
    platform: Platform,
    /// Host update channel.
    caller: Arc<dyn Caller>,
    /// Audit sink for forwarded and dropped changes.
    audit: Arc<dyn BridgeAuditSink>,
}

impl PunishmentChangeHandler {
    /// Creates a handler that does not audit.
    #[must_use]
    pub fn new(platform: Platform, caller: Arc<dyn Caller>) -> Self {
        Self::with_audit(platform, caller, Arc::new(NoopAuditSink))
    }

    /// Creates a handler with an audit sink.
    #[must_use]
    pub fn with_audit(
        platform: Platform,
        caller: Arc<dyn Caller>,
        audit: Arc<dyn BridgeAuditSink>,
    ) -> Self {
        Self {
            platform,
            caller,
            audit,
        }
    }

    /// Returns the platform this handler serves.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Forwards one change to the host.
    ///
    /// Only the player name is known at notification time, so the identifier
    /// is left for the host to resolve.
    pub fn on_change(&self, change: &PunishmentChange) {
        let player = change.player_name().clone();
        let event = match self.caller.update_player_data(None, &player) {
            Ok(()) => BridgeAuditEvent::ChangeForwarded {
                platform: self.platform,
                change: change.kind,
                player,
            },
            Err(err) => BridgeAuditEvent::ChangeDropped {
                platform: self.platform,
                change: change.kind,
                player,
                error: err.to_string(),
            },
        };
        self.audit.record(&event);
    }
}
