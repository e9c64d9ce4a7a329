// crates/punishment-bridge-providers/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared fixtures for provider tests.
// Purpose: Build punishment records and gateways over the in-memory subsystem.
// Dependencies: punishment-bridge-core, punishment-bridge-providers
// ============================================================================

//! ## Overview
//! Provides record builders and a gateway wired to an in-memory subsystem.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Arc;

use punishment_bridge_core::Expiry;
use punishment_bridge_core::InMemoryPunishmentSubsystem;
use punishment_bridge_core::PlayerName;
use punishment_bridge_core::PunishmentKind;
use punishment_bridge_core::PunishmentRecord;
use punishment_bridge_core::PunishmentUuid;
use punishment_bridge_core::Timestamp;
use punishment_bridge_providers::PunishmentGateway;

/// Issue time used by fixtures (2024-01-01T00:00:00Z).
pub const ISSUED_AT: i64 = 1_704_067_200_000;
/// End time used by expiring fixtures (2024-02-01T00:00:00Z).
pub const ENDS_AT: i64 = 1_706_745_600_000;

/// Returns the subsystem identifier used for a fixture player.
pub fn uuid_of(player: &str) -> PunishmentUuid {
    PunishmentUuid::new(format!("uuid-{}", player.to_lowercase()))
}

/// Builds an active punishment record for the player.
pub fn record(player: &str, kind: PunishmentKind) -> PunishmentRecord {
    let expires_at = if kind.will_expire() {
        Expiry::At(Timestamp::from_unix_millis(ENDS_AT))
    } else {
        Expiry::Permanent
    };
    PunishmentRecord {
        kind,
        player_name: PlayerName::new(player),
        uuid: uuid_of(player),
        operator: "Moderator".to_string(),
        reason: format!("{} for testing", kind.as_str()),
        issued_at: Timestamp::from_unix_millis(ISSUED_AT),
        expires_at,
        expired: false,
    }
}

/// Builds a warning record with the given expired flag.
pub fn warning(player: &str, expired: bool) -> PunishmentRecord {
    PunishmentRecord {
        expired,
        ..record(player, PunishmentKind::Warning)
    }
}

/// Returns a ready subsystem and a gateway over it.
pub fn gateway() -> (InMemoryPunishmentSubsystem, PunishmentGateway) {
    let subsystem = InMemoryPunishmentSubsystem::new();
    let gateway = PunishmentGateway::new(Arc::new(subsystem.clone()));
    (subsystem, gateway)
}
