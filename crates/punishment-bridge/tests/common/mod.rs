// crates/punishment-bridge/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared fixtures for factory and audit tests.
// Purpose: Build factories over in-memory collaborators and record outputs.
// Dependencies: punishment-bridge, punishment-bridge-core, punishment-bridge-providers
// ============================================================================

//! ## Overview
//! Provides fixture factories, a recording host registrar, and a collecting audit sink.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Arc;
use std::sync::Mutex;

use punishment_bridge::ExtensionFactory;
use punishment_bridge_config::BridgeConfig;
use punishment_bridge_core::BridgeAuditEvent;
use punishment_bridge_core::BridgeAuditSink;
use punishment_bridge_core::Expiry;
use punishment_bridge_core::InMemoryPunishmentSubsystem;
use punishment_bridge_core::PlayerName;
use punishment_bridge_core::PunishmentKind;
use punishment_bridge_core::PunishmentRecord;
use punishment_bridge_core::PunishmentUuid;
use punishment_bridge_core::StaticCapabilityRegistry;
use punishment_bridge_core::StaticFeatureResolver;
use punishment_bridge_core::Timestamp;
use punishment_bridge_providers::ExtensionRegistrar;
use punishment_bridge_providers::ProviderGraph;
use punishment_bridge_providers::RegistrationError;

/// Subsystem marker used by the stock config.
pub const SUBSYSTEM_MARKER: &str = "me.leoko.advancedban.Universal";
/// Capability required by the stock config.
pub const CAPABILITY: &str = "DATA_EXTENSION_SHOW_IN_PLAYER_TABLE";
/// Game server platform marker.
pub const BUKKIT_MARKER: &str = "org.bukkit.event.EventHandler";
/// Proxy platform marker.
pub const BUNGEE_MARKER: &str = "net.md_5.bungee.event.EventHandler";

/// Audit sink collecting events in memory.
#[derive(Default)]
pub struct CollectingAudit {
    /// Collected events.
    events: Mutex<Vec<BridgeAuditEvent>>,
}

impl CollectingAudit {
    /// Returns the collected events.
    pub fn events(&self) -> Vec<BridgeAuditEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BridgeAuditSink for CollectingAudit {
    fn record(&self, event: &BridgeAuditEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Host registrar keeping every graph it accepts.
#[derive(Default)]
pub struct RecordingRegistrar {
    /// Accepted graphs.
    pub graphs: Mutex<Vec<Arc<ProviderGraph>>>,
    /// Rejection message, if rejecting.
    pub reject: Option<String>,
}

impl ExtensionRegistrar for RecordingRegistrar {
    fn register_extension(&self, graph: Arc<ProviderGraph>) -> Result<(), RegistrationError> {
        if let Some(reason) = &self.reject {
            return Err(RegistrationError::Rejected(reason.clone()));
        }
        self.graphs.lock().unwrap().push(graph);
        Ok(())
    }
}

/// Fixture wiring a factory over in-memory collaborators.
pub struct Fixture {
    /// Punishment subsystem.
    pub subsystem: InMemoryPunishmentSubsystem,
    /// Audit sink.
    pub audit: Arc<CollectingAudit>,
    /// Factory under test.
    pub factory: ExtensionFactory,
}

/// Builds a factory with the given loadable features and granted capabilities.
pub fn fixture(features: &[&str], capabilities: &[&str], config: BridgeConfig) -> Fixture {
    let subsystem = InMemoryPunishmentSubsystem::new();
    let audit = Arc::new(CollectingAudit::default());
    let factory = ExtensionFactory::with_audit(
        Arc::new(StaticFeatureResolver::new(features.iter().copied())),
        Arc::new(StaticCapabilityRegistry::new(capabilities.iter().copied())),
        Arc::new(subsystem.clone()),
        config,
        Arc::clone(&audit) as _,
    );
    Fixture {
        subsystem,
        audit,
        factory,
    }
}

/// Builds a fixture where the subsystem, capability, and both platforms are present.
pub fn full_fixture() -> Fixture {
    fixture(
        &[SUBSYSTEM_MARKER, BUKKIT_MARKER, BUNGEE_MARKER],
        &[CAPABILITY],
        BridgeConfig::default(),
    )
}

/// Builds a temporary ban for the player.
pub fn temp_ban(player: &str) -> PunishmentRecord {
    PunishmentRecord {
        kind: PunishmentKind::TempBan,
        player_name: PlayerName::new(player),
        uuid: PunishmentUuid::new(format!("uuid-{player}")),
        operator: "Console".to_string(),
        reason: "griefing".to_string(),
        issued_at: Timestamp::from_unix_millis(1_704_067_200_000),
        expires_at: Expiry::At(Timestamp::from_unix_millis(1_706_745_600_000)),
        expired: false,
    }
}
