// crates/punishment-bridge/src/factory.rs
// ============================================================================
// Module: Extension Factory
// Description: Capability-gated construction of the extension and listeners.
// Purpose: Offer the punishment extension only where it can work.
// Dependencies: punishment-bridge-config, punishment-bridge-core,
//               punishment-bridge-listeners, punishment-bridge-providers
// ============================================================================

//! ## Overview
//! [`ExtensionFactory`] is the bridge's entry point. It checks that the
//! punishment subsystem is installed and the host grants the required
//! capability, then builds the provider graph and the platform listeners.
//! Invariants:
//! - Nothing is built when the composite availability check fails.
//! - Platforms are probed independently; one failing never blocks another.
//! - No operation here fails outward; skips are audited instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use punishment_bridge_config::BridgeConfig;
use punishment_bridge_core::BridgeAuditEvent;
use punishment_bridge_core::BridgeAuditSink;
use punishment_bridge_core::Caller;
use punishment_bridge_core::CapabilityProbe;
use punishment_bridge_core::CapabilityRegistry;
use punishment_bridge_core::FeatureResolver;
use punishment_bridge_core::NoopAuditSink;
use punishment_bridge_core::Platform;
use punishment_bridge_core::PunishmentSubsystem;
use punishment_bridge_listeners::BukkitListenerAdapter;
use punishment_bridge_listeners::BukkitPluginManager;
use punishment_bridge_listeners::BungeeListenerAdapter;
use punishment_bridge_listeners::BungeePluginManager;
use punishment_bridge_listeners::ListenerAdapter;
use punishment_bridge_listeners::PunishmentChangeHandler;
use punishment_bridge_providers::ExtensionRegistrar;
use punishment_bridge_providers::ProviderGraph;
use punishment_bridge_providers::PunishmentGateway;
use punishment_bridge_providers::RegistrationError;
use punishment_bridge_providers::punishment_extension_named;

// ============================================================================
// SECTION: Platform Handles
// ============================================================================

/// Plugin managers of the platforms present in this process.
#[derive(Clone, Default)]
pub struct PlatformHandles {
    /// Game server plugin manager.
    pub bukkit: Option<Arc<dyn BukkitPluginManager>>,
    /// Proxy plugin manager.
    pub bungee: Option<Arc<dyn BungeePluginManager>>,
}

// ============================================================================
// SECTION: Factory
// ============================================================================

/// Capability-gated factory for the punishment extension.
pub struct ExtensionFactory {
    /// Feature and capability probe.
    probe: CapabilityProbe,
    /// Punishment subsystem backing the providers.
    subsystem: Arc<dyn PunishmentSubsystem>,
    /// Bridge configuration.
    config: BridgeConfig,
    /// Audit sink shared with the probe and listeners.
    audit: Arc<dyn BridgeAuditSink>,
}

impl ExtensionFactory {
    /// Creates a factory that does not audit.
    #[must_use]
    pub fn new(
        features: Arc<dyn FeatureResolver>,
        capabilities: Arc<dyn CapabilityRegistry>,
        subsystem: Arc<dyn PunishmentSubsystem>,
        config: BridgeConfig,
    ) -> Self {
        Self::with_audit(features, capabilities, subsystem, config, Arc::new(NoopAuditSink))
    }

    /// Creates a factory recording probes, builds, and forwarded changes.
    #[must_use]
    pub fn with_audit(
        features: Arc<dyn FeatureResolver>,
        capabilities: Arc<dyn CapabilityRegistry>,
        subsystem: Arc<dyn PunishmentSubsystem>,
        config: BridgeConfig,
        audit: Arc<dyn BridgeAuditSink>,
    ) -> Self {
        Self {
            probe: CapabilityProbe::with_audit(features, capabilities, Arc::clone(&audit)),
            subsystem,
            config,
            audit,
        }
    }

    /// Returns the bridge configuration.
    #[must_use]
    pub const fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Returns true when the subsystem is installed and the capability granted.
    #[must_use]
    pub fn is_available(&self) -> bool {
        let extension = &self.config.extension;
        self.probe.is_available(&extension.subsystem_marker(), &extension.required_capability())
    }

    /// Builds the provider graph, or `None` when the extension is unavailable.
    #[must_use]
    pub fn create_extension(&self) -> Option<ProviderGraph> {
        let name = self.config.extension.name.clone();
        if !self.is_available() {
            self.audit.record(&BridgeAuditEvent::ExtensionSkipped {
                extension: name,
                reason: "punishment subsystem or host capability unavailable".to_string(),
            });
            return None;
        }
        let gateway = PunishmentGateway::new(Arc::clone(&self.subsystem));
        match punishment_extension_named(&gateway, &name) {
            Ok(graph) => {
                self.audit.record(&BridgeAuditEvent::ExtensionCreated {
                    extension: name,
                    providers: graph.len(),
                });
                Some(graph)
            }
            Err(err) => {
                self.audit.record(&BridgeAuditEvent::ExtensionSkipped {
                    extension: name,
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    /// Builds the extension and hands it to the host.
    ///
    /// Returns `Ok(false)` when the extension is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the host refuses the extension.
    pub fn register_extension(
        &self,
        registrar: &dyn ExtensionRegistrar,
    ) -> Result<bool, RegistrationError> {
        let Some(graph) = self.create_extension() else {
            return Ok(false);
        };
        registrar.register_extension(Arc::new(graph))?;
        Ok(true)
    }

    /// Registers a listener adapter for every loadable platform.
    ///
    /// Returns the adapters that subscribed successfully.
    #[must_use]
    pub fn register_listener(
        &self,
        caller: &Arc<dyn Caller>,
        handles: &PlatformHandles,
    ) -> Vec<Box<dyn ListenerAdapter>> {
        if !self.is_available() {
            for platform in Platform::ALL {
                self.skip_listener(platform, "punishment subsystem or host capability unavailable");
            }
            return Vec::new();
        }
        let mut registered = Vec::new();
        for platform in Platform::ALL {
            let settings = self.config.platforms.get(platform);
            if !settings.enabled {
                self.skip_listener(platform, "platform disabled by config");
                continue;
            }
            if !self.probe.is_feature_loadable(&settings.marker(platform)) {
                self.skip_listener(platform, "platform marker not loadable");
                continue;
            }
            let Some(adapter) = self.adapter_for(platform, caller, handles) else {
                self.skip_listener(platform, "platform handle not provided");
                continue;
            };
            match adapter.register() {
                Ok(()) => {
                    self.audit.record(&BridgeAuditEvent::ListenerRegistered {
                        platform,
                    });
                    registered.push(adapter);
                }
                Err(err) => self.skip_listener(platform, &err.to_string()),
            }
        }
        registered
    }

    /// Builds the adapter for a platform when its handle is present.
    fn adapter_for(
        &self,
        platform: Platform,
        caller: &Arc<dyn Caller>,
        handles: &PlatformHandles,
    ) -> Option<Box<dyn ListenerAdapter>> {
        let handler = Arc::new(PunishmentChangeHandler::with_audit(
            platform,
            Arc::clone(caller),
            Arc::clone(&self.audit),
        ));
        let host_plugin = self.config.extension.host_plugin.as_str();
        match platform {
            Platform::Bukkit => handles.bukkit.as_ref().map(|plugins| {
                Box::new(BukkitListenerAdapter::new(Arc::clone(plugins), host_plugin, handler))
                    as Box<dyn ListenerAdapter>
            }),
            Platform::Bungee => handles.bungee.as_ref().map(|plugins| {
                Box::new(BungeeListenerAdapter::new(Arc::clone(plugins), host_plugin, handler))
                    as Box<dyn ListenerAdapter>
            }),
        }
    }

    /// Records a skipped platform.
    fn skip_listener(&self, platform: Platform, reason: &str) {
        self.audit.record(&BridgeAuditEvent::ListenerSkipped {
            platform,
            reason: reason.to_string(),
        });
    }
}
