// crates/punishment-bridge-listeners/src/platform/bukkit.rs
// ============================================================================
// Module: Bukkit Listener Adapter
// Description: Game-server platform events and the adapter subscribing to them.
// Purpose: Forward Bukkit punishment notifications to the host update channel.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! The game server delivers punishment notifications to listeners registered
//! through its plugin manager, bound to an owning plugin.

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

/// A punishment was issued on the game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BukkitPunishmentEvent {
    /// Issued punishment.
    pub punishment: PunishmentRecord,
}

/// A punishment was revoked on the game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BukkitRevokePunishmentEvent {
    /// Revoked punishment.
    pub punishment: PunishmentRecord,
}

/// Listener invoked by the game server's event bus.
pub trait BukkitListener: Send + Sync {
    /// Handles an issued punishment.
    fn on_punishment(&self, event: &BukkitPunishmentEvent);

    /// Handles a revoked punishment.
    fn on_revoke_punishment(&self, event: &BukkitRevokePunishmentEvent);
}

/// Game server plugin manager.
pub trait BukkitPluginManager: Send + Sync {
    /// Looks up a loaded plugin by name.
    fn plugin(&self, name: &str) -> Option<PluginHandle>;

    /// Registers a listener owned by the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the server refuses the listener.
    fn register_events(
        &self,
        listener: Arc<dyn BukkitListener>,
        plugin: &PluginHandle,
    ) -> Result<(), PlatformError>;
}

// ============================================================================
// SECTION: Adapter
// ============================================================================

/// Event bus listener forwarding to the shared handler.
struct BukkitChangeListener {
    /// Shared change handler.
    handler: Arc<PunishmentChangeHandler>,
}

impl BukkitListener for BukkitChangeListener {
    fn on_punishment(&self, event: &BukkitPunishmentEvent) {
        self.handler.on_change(&PunishmentChange {
            kind: ChangeKind::Punish,
            punishment: event.punishment.clone(),
        });
    }

    fn on_revoke_punishment(&self, event: &BukkitRevokePunishmentEvent) {
        self.handler.on_change(&PunishmentChange {
            kind: ChangeKind::Revoke,
            punishment: event.punishment.clone(),
        });
    }
}

/// Listener adapter for the game server platform.
pub struct BukkitListenerAdapter {
    /// Plugin manager used to subscribe.
    plugins: Arc<dyn BukkitPluginManager>,
    /// Name of the host plugin owning the listener.
    host_plugin: String,
    /// Shared change handler.
    handler: Arc<PunishmentChangeHandler>,
    /// Once-only registration latch.
    latch: RegistrationLatch,
}

impl BukkitListenerAdapter {
    /// Creates an adapter bound to the named host plugin.
    #[must_use]
    pub fn new(
        plugins: Arc<dyn BukkitPluginManager>,
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

impl ListenerAdapter for BukkitListenerAdapter {
    fn platform(&self) -> Platform {
        Platform::Bukkit
    }

    fn register(&self) -> Result<(), ListenerError> {
        self.latch.register_once(|| {
            let plugin = self
                .plugins
                .plugin(&self.host_plugin)
                .ok_or_else(|| PlatformError::PluginMissing(self.host_plugin.clone()))?;
            let listener = Arc::new(BukkitChangeListener {
                handler: Arc::clone(&self.handler),
            });
            self.plugins.register_events(listener, &plugin)
        })
    }

    fn is_registered(&self) -> bool {
        self.latch.is_registered()
    }
}
