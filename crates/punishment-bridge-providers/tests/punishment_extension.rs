// crates/punishment-bridge-providers/tests/punishment_extension.rs
// ============================================================================
// Module: Punishment Extension Tests
// Description: End-to-end evaluation of the ban, mute, and warning providers.
// Purpose: Validate provider values and gating against subsystem state.
// Dependencies: punishment-bridge-core, punishment-bridge-providers
// ============================================================================

//! ## Overview
//! Builds [`punishment_bridge_providers::punishment_extension`] over the
//! in-memory subsystem (and a deliberately inconsistent stub) and checks
//! what the host would render.

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

mod common;

use std::sync::Arc;
use std::thread;

use punishment_bridge_core::InMemoryPunishmentSubsystem;
use punishment_bridge_core::PlayerName;
use punishment_bridge_core::PunishmentCategory;
use punishment_bridge_core::PunishmentKind;
use punishment_bridge_core::PunishmentManager;
use punishment_bridge_core::PunishmentRecord;
use punishment_bridge_core::PunishmentSubsystem;
use punishment_bridge_core::PunishmentUuid;
use punishment_bridge_core::SubsystemError;
use punishment_bridge_providers::CallEvent;
use punishment_bridge_providers::ProviderError;
use punishment_bridge_providers::ProviderGraph;
use punishment_bridge_providers::ProviderValue;
use punishment_bridge_providers::PunishmentGateway;
use punishment_bridge_providers::extension::EXTENSION_NAME;
use punishment_bridge_providers::extension::keys;
use punishment_bridge_providers::punishment_extension;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn extension() -> (InMemoryPunishmentSubsystem, ProviderGraph) {
    let (subsystem, gateway) = common::gateway();
    (subsystem, punishment_extension(&gateway).unwrap())
}

fn compute(graph: &ProviderGraph, key: &str, player: &str) -> ProviderValue {
    graph.get(key).unwrap().compute(&PlayerName::new(player)).unwrap()
}

/// Manager claiming every player is banned and muted without any records.
struct FlagOnlyManager;

impl PunishmentManager for FlagOnlyManager {
    fn is_banned(&self, _uuid: &PunishmentUuid) -> bool {
        true
    }

    fn is_muted(&self, _uuid: &PunishmentUuid) -> bool {
        true
    }

    fn ban(&self, _uuid: &PunishmentUuid) -> Option<PunishmentRecord> {
        None
    }

    fn mute(&self, _uuid: &PunishmentUuid) -> Option<PunishmentRecord> {
        None
    }

    fn warnings(&self, _uuid: &PunishmentUuid) -> Vec<PunishmentRecord> {
        Vec::new()
    }
}

/// Subsystem that knows every player and serves [`FlagOnlyManager`].
struct FlagOnlySubsystem;

impl PunishmentSubsystem for FlagOnlySubsystem {
    fn uuid_for(&self, name: &PlayerName) -> Option<PunishmentUuid> {
        Some(common::uuid_of(name.as_str()))
    }

    fn manager(&self) -> Result<Arc<dyn PunishmentManager>, SubsystemError> {
        Ok(Arc::new(FlagOnlyManager))
    }
}

// ============================================================================
// SECTION: Shape
// ============================================================================

#[test]
fn extension_declares_thirteen_providers_in_priority_order() {
    let (_subsystem, graph) = extension();
    let keys: Vec<&str> = graph.providers().iter().map(|p| p.key().as_str()).collect();
    assert_eq!(
        keys,
        [
            keys::BANNED,
            keys::BAN_ISSUER,
            keys::BAN_ISSUE_DATE,
            keys::BAN_WILL_EXPIRE,
            keys::BAN_EXPIRE_DATE,
            keys::BAN_REASON,
            keys::MUTED,
            keys::MUTE_ISSUER,
            keys::MUTE_ISSUE_DATE,
            keys::MUTE_WILL_EXPIRE,
            keys::MUTE_EXPIRE_DATE,
            keys::MUTE_REASON,
            keys::WARNINGS,
        ]
    );
    assert_eq!(graph.plugin().name, EXTENSION_NAME);
    assert_eq!(graph.call_events(), [CallEvent::PlayerJoin, CallEvent::PlayerLeave]);
    let columns: Vec<&str> = graph.table_columns().map(|p| p.key().as_str()).collect();
    assert_eq!(columns, [keys::MUTED, keys::WARNINGS]);
    assert!(graph.get(keys::BAN_ISSUER).unwrap().decoration().player_name);
}

// ============================================================================
// SECTION: Unknown Players
// ============================================================================

#[test]
fn unknown_player_is_clean() {
    let (_subsystem, graph) = extension();
    assert_eq!(compute(&graph, keys::BANNED, "Nobody"), ProviderValue::Boolean(false));
    assert_eq!(compute(&graph, keys::MUTED, "Nobody"), ProviderValue::Boolean(false));
    assert_eq!(compute(&graph, keys::WARNINGS, "Nobody"), ProviderValue::Number(0));
    assert!(compute(&graph, keys::BAN_REASON, "Nobody").is_absent());

    let evaluation = graph.evaluate_player(&PlayerName::new("Nobody")).unwrap();
    let visible: Vec<&str> = evaluation.values.iter().map(|v| v.key.as_str()).collect();
    assert_eq!(visible, [keys::BANNED, keys::MUTED, keys::WARNINGS]);
}

// ============================================================================
// SECTION: Bans
// ============================================================================

#[test]
fn permanent_ban_hides_expire_date() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::record("Alice", PunishmentKind::Ban));

    let evaluation = graph.evaluate_player(&PlayerName::new("Alice")).unwrap();
    assert_eq!(evaluation.get(keys::BANNED), Some(&ProviderValue::Boolean(true)));
    assert_eq!(evaluation.get(keys::BAN_WILL_EXPIRE), Some(&ProviderValue::Boolean(false)));
    assert!(!evaluation.contains(keys::BAN_EXPIRE_DATE));
    assert_eq!(
        evaluation.get(keys::BAN_ISSUER),
        Some(&ProviderValue::String("Moderator".to_string()))
    );
    assert_eq!(
        evaluation.get(keys::BAN_ISSUE_DATE),
        Some(&ProviderValue::Number(common::ISSUED_AT))
    );
    assert_eq!(
        evaluation.get(keys::BAN_REASON),
        Some(&ProviderValue::String("ban for testing".to_string()))
    );
}

#[test]
fn ip_ban_counts_as_permanent() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::record("Alice", PunishmentKind::IpBan));
    assert_eq!(compute(&graph, keys::BAN_WILL_EXPIRE, "Alice"), ProviderValue::Boolean(false));
}

#[test]
fn temporary_ban_shows_expire_date() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::record("Alice", PunishmentKind::TempBan));

    let evaluation = graph.evaluate_player(&PlayerName::new("Alice")).unwrap();
    assert_eq!(evaluation.get(keys::BAN_WILL_EXPIRE), Some(&ProviderValue::Boolean(true)));
    assert_eq!(
        evaluation.get(keys::BAN_EXPIRE_DATE),
        Some(&ProviderValue::Number(common::ENDS_AT))
    );
}

#[test]
fn revoked_ban_reads_as_absent_in_gated_providers() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::record("Alice", PunishmentKind::TempBan));
    assert!(subsystem.revoke(&common::uuid_of("Alice"), PunishmentCategory::Ban).is_some());

    assert_eq!(compute(&graph, keys::BANNED, "Alice"), ProviderValue::Boolean(false));
    assert_eq!(compute(&graph, keys::BAN_WILL_EXPIRE, "Alice"), ProviderValue::Boolean(false));
    assert!(compute(&graph, keys::BAN_EXPIRE_DATE, "Alice").is_absent());
    assert!(compute(&graph, keys::BAN_ISSUER, "Alice").is_absent());
}

// ============================================================================
// SECTION: Mutes
// ============================================================================

#[test]
fn temporary_mute_mirrors_ban_providers() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::record("Bob", PunishmentKind::TempMute));

    let evaluation = graph.evaluate_player(&PlayerName::new("Bob")).unwrap();
    assert_eq!(evaluation.get(keys::BANNED), Some(&ProviderValue::Boolean(false)));
    assert!(!evaluation.contains(keys::BAN_REASON));
    assert_eq!(evaluation.get(keys::MUTED), Some(&ProviderValue::Boolean(true)));
    assert_eq!(evaluation.get(keys::MUTE_WILL_EXPIRE), Some(&ProviderValue::Boolean(true)));
    assert_eq!(
        evaluation.get(keys::MUTE_EXPIRE_DATE),
        Some(&ProviderValue::Number(common::ENDS_AT))
    );
    assert_eq!(
        evaluation.get(keys::MUTE_REASON),
        Some(&ProviderValue::String("temp_mute for testing".to_string()))
    );
}

#[test]
fn permanent_mute_hides_expire_date() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::record("Bob", PunishmentKind::Mute));

    let evaluation = graph.evaluate_player(&PlayerName::new("Bob")).unwrap();
    assert_eq!(evaluation.get(keys::MUTE_WILL_EXPIRE), Some(&ProviderValue::Boolean(false)));
    assert!(!evaluation.contains(keys::MUTE_EXPIRE_DATE));
}

// ============================================================================
// SECTION: Warnings
// ============================================================================

#[test]
fn warnings_count_only_unexpired() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::warning("Carol", false));
    subsystem.punish(common::warning("Carol", true));
    subsystem.punish(common::warning("Carol", false));

    assert_eq!(compute(&graph, keys::WARNINGS, "Carol"), ProviderValue::Number(2));
}

// ============================================================================
// SECTION: Failure Modes
// ============================================================================

#[test]
fn uninitialized_subsystem_reports_not_ready_everywhere() {
    let subsystem = InMemoryPunishmentSubsystem::uninitialized("booting");
    subsystem.register_player(PlayerName::new("Alice"), common::uuid_of("Alice"));
    let gateway = PunishmentGateway::new(Arc::new(subsystem));
    let graph = punishment_extension(&gateway).unwrap();
    let player = PlayerName::new("Alice");

    for provider in graph.providers() {
        assert_eq!(
            provider.compute(&player),
            Err(ProviderError::NotReady("booting".to_string())),
            "provider {}",
            provider.key()
        );
    }
    assert!(graph.evaluate_player(&player).is_err());
}

#[test]
fn flag_without_record_reads_as_absent() {
    let gateway = PunishmentGateway::new(Arc::new(FlagOnlySubsystem));
    let graph = punishment_extension(&gateway).unwrap();

    let evaluation = graph.evaluate_player(&PlayerName::new("Dave")).unwrap();
    assert_eq!(evaluation.get(keys::BANNED), Some(&ProviderValue::Boolean(true)));
    assert_eq!(evaluation.get(keys::BAN_ISSUER), Some(&ProviderValue::Absent));
    assert_eq!(evaluation.get(keys::BAN_REASON), Some(&ProviderValue::Absent));
    assert_eq!(evaluation.get(keys::BAN_WILL_EXPIRE), Some(&ProviderValue::Boolean(false)));
    assert!(!evaluation.contains(keys::BAN_EXPIRE_DATE));
    assert_eq!(evaluation.get(keys::MUTE_ISSUE_DATE), Some(&ProviderValue::Absent));
}

// ============================================================================
// SECTION: Concurrency
// ============================================================================

#[test]
fn graph_evaluates_concurrently() {
    let (subsystem, graph) = extension();
    subsystem.punish(common::record("Alice", PunishmentKind::TempBan));
    subsystem.punish(common::warning("Bob", false));
    let graph = Arc::new(graph);

    let handles: Vec<_> = ["Alice", "Bob", "Nobody"]
        .into_iter()
        .cycle()
        .take(12)
        .map(|player| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || graph.evaluate_player(&PlayerName::new(player)).unwrap())
        })
        .collect();

    for handle in handles {
        let evaluation = handle.join().unwrap();
        let banned = evaluation.player.as_str() == "Alice";
        assert_eq!(evaluation.get(keys::BANNED), Some(&ProviderValue::Boolean(banned)));
        let warnings = i64::from(evaluation.player.as_str() == "Bob");
        assert_eq!(evaluation.get(keys::WARNINGS), Some(&ProviderValue::Number(warnings)));
    }
}
