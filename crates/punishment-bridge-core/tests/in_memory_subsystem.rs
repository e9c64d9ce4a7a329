// crates/punishment-bridge-core/tests/in_memory_subsystem.rs
// ============================================================================
// Module: In-Memory Subsystem Tests
// Description: Readiness, identity, and record lookups for the in-memory subsystem.
// Purpose: Validate the reference collaborator used across the workspace.
// Dependencies: punishment-bridge-core, serde_json
// ============================================================================

//! ## Overview
//! Exercises [`punishment_bridge_core::InMemoryPunishmentSubsystem`].

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use punishment_bridge_core::BridgeAuditEvent;
use punishment_bridge_core::ChangeKind;
use punishment_bridge_core::Expiry;
use punishment_bridge_core::InMemoryPunishmentSubsystem;
use punishment_bridge_core::Platform;
use punishment_bridge_core::PlayerName;
use punishment_bridge_core::PunishmentCategory;
use punishment_bridge_core::PunishmentKind;
use punishment_bridge_core::PunishmentRecord;
use punishment_bridge_core::PunishmentSubsystem;
use punishment_bridge_core::PunishmentUuid;
use punishment_bridge_core::SubsystemError;
use punishment_bridge_core::Timestamp;

fn record(kind: PunishmentKind, issued_at: i64) -> PunishmentRecord {
    PunishmentRecord {
        kind,
        player_name: PlayerName::new("Alice"),
        uuid: PunishmentUuid::new("uuid-alice"),
        operator: "Moderator".to_string(),
        reason: "griefing".to_string(),
        issued_at: Timestamp::from_unix_millis(issued_at),
        expires_at: Expiry::Permanent,
        expired: false,
    }
}

#[test]
fn unknown_player_has_no_identity() {
    let subsystem = InMemoryPunishmentSubsystem::new();
    assert_eq!(subsystem.uuid_for(&PlayerName::new("Nobody")), None);
}

#[test]
fn uninitialized_manager_reports_reason() {
    let subsystem = InMemoryPunishmentSubsystem::uninitialized("storage offline");
    let Err(error) = subsystem.manager() else {
        panic!("manager should not be available");
    };
    assert_eq!(error, SubsystemError::Uninitialized("storage offline".to_string()));
    subsystem.mark_ready();
    assert!(subsystem.manager().is_ok());
}

#[test]
fn punish_indexes_identity_and_activates_ban() {
    let subsystem = InMemoryPunishmentSubsystem::new();
    subsystem.punish(record(PunishmentKind::Ban, 10));
    let uuid = subsystem.uuid_for(&PlayerName::new("Alice")).unwrap();
    let manager = subsystem.manager().unwrap();
    assert!(manager.is_banned(&uuid));
    assert!(!manager.is_muted(&uuid));
    assert_eq!(manager.ban(&uuid).unwrap().kind, PunishmentKind::Ban);
}

#[test]
fn manager_handle_observes_later_changes() {
    let subsystem = InMemoryPunishmentSubsystem::new();
    let manager = subsystem.manager().unwrap();
    let uuid = PunishmentUuid::new("uuid-alice");
    assert!(!manager.is_muted(&uuid));
    subsystem.punish(record(PunishmentKind::TempMute, 10));
    assert!(manager.is_muted(&uuid));
    let revoked = subsystem.revoke(&uuid, PunishmentCategory::Mute).unwrap();
    assert_eq!(revoked.kind, PunishmentKind::TempMute);
    assert!(!manager.is_muted(&uuid));
}

#[test]
fn latest_ban_wins() {
    let subsystem = InMemoryPunishmentSubsystem::new();
    subsystem.punish(record(PunishmentKind::TempBan, 10));
    subsystem.punish(record(PunishmentKind::IpBan, 20));
    let manager = subsystem.manager().unwrap();
    let ban = manager.ban(&PunishmentUuid::new("uuid-alice")).unwrap();
    assert_eq!(ban.kind, PunishmentKind::IpBan);
}

#[test]
fn warnings_include_expired_records() {
    let subsystem = InMemoryPunishmentSubsystem::new();
    subsystem.punish(record(PunishmentKind::Warning, 1));
    subsystem.punish(PunishmentRecord {
        expired: true,
        ..record(PunishmentKind::TempWarning, 2)
    });
    subsystem.punish(record(PunishmentKind::Kick, 3));
    let manager = subsystem.manager().unwrap();
    assert_eq!(manager.warnings(&PunishmentUuid::new("uuid-alice")).len(), 2);
}

#[test]
fn audit_events_serialize_with_stable_tags() {
    let event = BridgeAuditEvent::ChangeForwarded {
        platform: Platform::Bungee,
        change: ChangeKind::Revoke,
        player: PlayerName::new("Alice"),
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["event"], "change_forwarded");
    assert_eq!(value["platform"], "bungee");
    assert_eq!(value["change"], "revoke");
    assert_eq!(value["player"], "Alice");
    assert_eq!(event.label(), "change_forwarded");
}
