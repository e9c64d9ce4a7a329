// crates/punishment-bridge-listeners/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared fixtures for listener tests.
// Purpose: Record host updates and audit events produced by adapters.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! Provides a recording host caller, a collecting audit sink, and record builders.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Mutex;

use punishment_bridge_core::BridgeAuditEvent;
use punishment_bridge_core::BridgeAuditSink;
use punishment_bridge_core::Caller;
use punishment_bridge_core::CallerError;
use punishment_bridge_core::Expiry;
use punishment_bridge_core::PlayerId;
use punishment_bridge_core::PlayerName;
use punishment_bridge_core::PunishmentKind;
use punishment_bridge_core::PunishmentRecord;
use punishment_bridge_core::PunishmentUuid;
use punishment_bridge_core::Timestamp;

/// Host plugin name used by fixtures.
pub const HOST_PLUGIN: &str = "Plan";

/// Builds a punishment record for the player.
pub fn record(player: &str, kind: PunishmentKind) -> PunishmentRecord {
    PunishmentRecord {
        kind,
        player_name: PlayerName::new(player),
        uuid: PunishmentUuid::new(format!("uuid-{player}")),
        operator: "Console".to_string(),
        reason: "testing".to_string(),
        issued_at: Timestamp::from_unix_millis(1_704_067_200_000),
        expires_at: Expiry::Permanent,
        expired: false,
    }
}

/// Host caller recording every update, optionally rejecting them.
#[derive(Default)]
pub struct RecordingCaller {
    /// Recorded `(identifier, name)` pairs.
    calls: Mutex<Vec<(Option<PlayerId>, PlayerName)>>,
    /// Rejection message, if rejecting.
    reject: Option<String>,
}

impl RecordingCaller {
    /// Creates a caller that rejects every update after recording it.
    pub fn rejecting(reason: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject: Some(reason.to_string()),
        }
    }

    /// Returns the recorded player names in call order.
    pub fn names(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, name)| name.to_string()).collect()
    }

    /// Returns true when every recorded call omitted the identifier.
    pub fn all_without_identifier(&self) -> bool {
        self.calls.lock().unwrap().iter().all(|(id, _)| id.is_none())
    }
}

impl Caller for RecordingCaller {
    fn update_player_data(
        &self,
        player_id: Option<&PlayerId>,
        player_name: &PlayerName,
    ) -> Result<(), CallerError> {
        self.calls.lock().unwrap().push((player_id.cloned(), player_name.clone()));
        match &self.reject {
            Some(reason) => Err(CallerError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

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
