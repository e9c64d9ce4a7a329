// crates/punishment-bridge-listeners/src/platform/memory.rs
// ============================================================================
// Module: In-Memory Platforms
// Description: Reference game server and proxy plugin managers.
// Purpose: Drive listener adapters without a running platform.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! [`InMemoryBukkitServer`] and [`InMemoryBungeeProxy`] keep registered
//! listeners in memory and deliver events to them synchronously, in
//! registration order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use punishment_bridge_core::PunishmentRecord;

use crate::adapter::PlatformError;
use crate::adapter::PluginHandle;
use crate::platform::bukkit::BukkitListener;
use crate::platform::bukkit::BukkitPluginManager;
use crate::platform::bukkit::BukkitPunishmentEvent;
use crate::platform::bukkit::BukkitRevokePunishmentEvent;
use crate::platform::bungee::BungeeListener;
use crate::platform::bungee::BungeePluginManager;
use crate::platform::bungee::BungeePunishmentEvent;
use crate::platform::bungee::BungeeRevokePunishmentEvent;

// ============================================================================
// SECTION: Shared State
// ============================================================================

/// Plugins and listeners known to an in-memory platform.
struct PlatformState<L: ?Sized> {
    /// Loaded plugin names.
    plugins: BTreeSet<String>,
    /// Registered listeners with their owning plugin.
    listeners: Vec<(String, Arc<L>)>,
    /// Reason to refuse new listeners, if set.
    refusal: Option<String>,
}

impl<L: ?Sized> PlatformState<L> {
    /// Creates state with the given plugins loaded.
    fn with_plugins<I, S>(plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plugins: plugins.into_iter().map(Into::into).collect(),
            listeners: Vec::new(),
            refusal: None,
        }
    }

    /// Returns the plugin handle when loaded.
    fn plugin(&self, name: &str) -> Option<PluginHandle> {
        self.plugins.contains(name).then(|| PluginHandle {
            name: name.to_string(),
        })
    }

    /// Adds a listener unless refusing or the plugin is not loaded.
    fn register(&mut self, plugin: &PluginHandle, listener: Arc<L>) -> Result<(), PlatformError> {
        if let Some(reason) = &self.refusal {
            return Err(PlatformError::RegistrationFailed(reason.clone()));
        }
        if !self.plugins.contains(&plugin.name) {
            return Err(PlatformError::PluginMissing(plugin.name.clone()));
        }
        self.listeners.push((plugin.name.clone(), listener));
        Ok(())
    }

    /// Snapshot of listeners so delivery happens outside the lock.
    fn snapshot(&self) -> Vec<Arc<L>> {
        self.listeners.iter().map(|(_, listener)| Arc::clone(listener)).collect()
    }
}

/// Locks platform state, recovering from poisoning.
fn lock<L: ?Sized>(state: &Mutex<PlatformState<L>>) -> MutexGuard<'_, PlatformState<L>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// SECTION: Game Server
// ============================================================================

/// In-memory game server plugin manager.
#[derive(Clone)]
pub struct InMemoryBukkitServer {
    /// Shared server state.
    state: Arc<Mutex<PlatformState<dyn BukkitListener>>>,
}

impl InMemoryBukkitServer {
    /// Creates a server with the named plugins loaded.
    #[must_use]
    pub fn new<I, S>(plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Arc::new(Mutex::new(PlatformState::with_plugins(plugins))),
        }
    }

    /// Refuses every subsequent listener registration.
    pub fn refuse_registrations(&self, reason: impl Into<String>) {
        lock(&self.state).refusal = Some(reason.into());
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.state).listeners.len()
    }

    /// Returns the owning plugin of each registered listener.
    #[must_use]
    pub fn listener_owners(&self) -> Vec<String> {
        lock(&self.state).listeners.iter().map(|(owner, _)| owner.clone()).collect()
    }

    /// Delivers a punishment event to every listener.
    pub fn fire_punishment(&self, punishment: &PunishmentRecord) {
        let event = BukkitPunishmentEvent {
            punishment: punishment.clone(),
        };
        let listeners = lock(&self.state).snapshot();
        for listener in listeners {
            listener.on_punishment(&event);
        }
    }

    /// Delivers a revoke event to every listener.
    pub fn fire_revoke(&self, punishment: &PunishmentRecord) {
        let event = BukkitRevokePunishmentEvent {
            punishment: punishment.clone(),
        };
        let listeners = lock(&self.state).snapshot();
        for listener in listeners {
            listener.on_revoke_punishment(&event);
        }
    }
}

impl BukkitPluginManager for InMemoryBukkitServer {
    fn plugin(&self, name: &str) -> Option<PluginHandle> {
        lock(&self.state).plugin(name)
    }

    fn register_events(
        &self,
        listener: Arc<dyn BukkitListener>,
        plugin: &PluginHandle,
    ) -> Result<(), PlatformError> {
        lock(&self.state).register(plugin, listener)
    }
}

// ============================================================================
// SECTION: Proxy
// ============================================================================

/// In-memory proxy plugin manager.
#[derive(Clone)]
pub struct InMemoryBungeeProxy {
    /// Shared proxy state.
    state: Arc<Mutex<PlatformState<dyn BungeeListener>>>,
}

impl InMemoryBungeeProxy {
    /// Creates a proxy with the named plugins loaded.
    #[must_use]
    pub fn new<I, S>(plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Arc::new(Mutex::new(PlatformState::with_plugins(plugins))),
        }
    }

    /// Refuses every subsequent listener registration.
    pub fn refuse_registrations(&self, reason: impl Into<String>) {
        lock(&self.state).refusal = Some(reason.into());
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.state).listeners.len()
    }

    /// Delivers a punishment event to every listener.
    pub fn fire_punishment(&self, punishment: &PunishmentRecord) {
        let event = BungeePunishmentEvent {
            punishment: punishment.clone(),
        };
        let listeners = lock(&self.state).snapshot();
        for listener in listeners {
            listener.on_punishment(&event);
        }
    }

    /// Delivers a revoke event to every listener.
    pub fn fire_revoke(&self, punishment: &PunishmentRecord) {
        let event = BungeeRevokePunishmentEvent {
            punishment: punishment.clone(),
        };
        let listeners = lock(&self.state).snapshot();
        for listener in listeners {
            listener.on_revoke_punishment(&event);
        }
    }
}

impl BungeePluginManager for InMemoryBungeeProxy {
    fn plugin(&self, name: &str) -> Option<PluginHandle> {
        lock(&self.state).plugin(name)
    }

    fn register_listener(
        &self,
        plugin: &PluginHandle,
        listener: Arc<dyn BungeeListener>,
    ) -> Result<(), PlatformError> {
        lock(&self.state).register(plugin, listener)
    }
}
