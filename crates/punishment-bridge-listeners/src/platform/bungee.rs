// crates/punishment-bridge-listeners/src/platform/bungee.rs
// ============================================================================
// Module: Bungee Listener Adapter
// Description: Proxy platform events and the adapter subscribing to them.
// Purpose: Forward proxy punishment notifications to the host update channel.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! The proxy looks plugins up by name and registers listeners against the
//! owning plugin before handing it events.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use punishment_bridge_core::ChangeKind;
use punishment_bridge_core::Platform;
use punishment_bridge_core::PunishmentChange;
use punishment_bridge_core::PunishmentRecord;

use crate::adapter::ListenerAdapter;
use crate::adapter::ListenerError;
use crate::adapter::PlatformError;
use crate::adapter::PluginHandle;
use crate::adapter::PunishmentChangeHandler;
use crate::adapter::RegistrationLatch;

// ============================================================================
// SECTION: Platform API
// ============================================================================

/// A punishment was issued through the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BungeePunishmentEvent {
    /// Issued punishment.
    pub punishment: PunishmentRecord,
}

/// A punishment was revoked through the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BungeeRevokePunishmentEvent {
    /// Revoked punishment.
    pub punishment: PunishmentRecord,
}

/// Listener invoked by the proxy's event bus.
pub trait BungeeListener: Send + Sync {
    /// Handles an issued punishment.
    fn on_punishment(&self, event: &BungeePunishmentEvent);

    /// Handles a revoked punishment.
    fn on_revoke_punishment(&self, event: &BungeeRevokePunishmentEvent);
}

/// Proxy plugin manager.
pub trait BungeePluginManager: Send + Sync {
    /// Looks up a loaded plugin by name.
    fn plugin(&self, name: &str) -> Option<PluginHandle>;

    /// Registers a listener owned by the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the proxy refuses the listener.
    fn register_listener(
        &self,
        plugin: &PluginHandle,
        listener: Arc<dyn BungeeListener>,
    ) -> Result<(), PlatformError>;
}

// ============================================================================
// SECTION: Adapter
// ============================================================================

/// Event bus listener forwarding to the shared handler.
struct BungeeChangeListener {
    /// Shared change handler.
    handler: Arc<PunishmentChangeHandler>,
}

impl BungeeListener for BungeeChangeListener {
    fn on_punishment(&self, event: &BungeePunishmentEvent) {
        self.handler.on_change(&PunishmentChange {
            kind: ChangeKind::Punish,
            punishment: event.punishment.clone(),
        });
    }

    fn on_revoke_punishment(&self, event: &BungeeRevokePunishmentEvent) {
        self.handler.on_change(&PunishmentChange {
            kind: ChangeKind::Revoke,
            punishment: event.punishment.clone(),
        });
    }
}

/// Listener adapter for the proxy platform.
pub struct BungeeListenerAdapter {
    /// Plugin manager used to subscribe.
    plugins: Arc<dyn BungeePluginManager>,
    /// Name of the host plugin owning the listener.
    host_plugin: String,
    /// Shared change handler.
    handler: Arc<PunishmentChangeHandler>,
    /// Once-only registration latch.
    latch: RegistrationLatch,
}

impl BungeeListenerAdapter {
    /// Creates an adapter bound to the named host plugin.
    #[must_use]
    pub fn new(
        plugins: Arc<dyn BungeePluginManager>,
        host_plugin: impl Into<String>,
        handler: Arc<PunishmentChangeHandler>,
    ) -> Self {
        Self {
            plugins,
            host_plugin: host_plugin.into(),
            handler,
            latch: RegistrationLatch::default(),
        }
    }
}

impl ListenerAdapter for BungeeListenerAdapter {
    fn platform(&self) -> Platform {
        Platform::Bungee
    }

    fn register(&self) -> Result<(), ListenerError> {
        self.latch.register_once(|| {
            let plugin = self
                .plugins
                .plugin(&self.host_plugin)
                .ok_or_else(|| PlatformError::PluginMissing(self.host_plugin.clone()))?;
            let listener = Arc::new(BungeeChangeListener {
                handler: Arc::clone(&self.handler),
            });
            self.plugins.register_listener(&plugin, listener)
        })
    }

    fn is_registered(&self) -> bool {
        self.latch.is_registered()
    }
}
