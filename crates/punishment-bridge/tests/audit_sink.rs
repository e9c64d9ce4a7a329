// crates/punishment-bridge/tests/audit_sink.rs
// ============================================================================
// Module: Audit Sink Tests
// Description: JSON-lines audit output and config-driven sink selection.
// Purpose: Validate line shape, sequencing, and file persistence.
// Dependencies: punishment-bridge, punishment-bridge-config, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Exercises [`punishment_bridge::JsonLineAuditSink`] and
//! [`punishment_bridge::audit_sink_from_config`].

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

use std::fs;
use std::sync::Arc;

use punishment_bridge::ExtensionFactory;
use punishment_bridge::JsonLineAuditSink;
use punishment_bridge::audit_sink_from_config;
use punishment_bridge_config::AuditConfig;
use punishment_bridge_config::BridgeConfig;
use punishment_bridge_core::BridgeAuditEvent;
use punishment_bridge_core::BridgeAuditSink;
use punishment_bridge_core::Platform;
use punishment_bridge_core::InMemoryPunishmentSubsystem;
use punishment_bridge_core::StaticCapabilityRegistry;
use punishment_bridge_core::StaticFeatureResolver;
use serde_json::Value;

/// Parses every line written to a buffer.
fn parse_lines(buffer: &[u8]) -> Vec<Value> {
    String::from_utf8(buffer.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn lines_carry_sequence_time_and_event_tag() {
    let sink = JsonLineAuditSink::new(Vec::new());
    sink.record(&BridgeAuditEvent::ListenerRegistered {
        platform: Platform::Bukkit,
    });
    sink.record(&BridgeAuditEvent::ExtensionSkipped {
        extension: "AdvancedBan".to_string(),
        reason: "capability not granted".to_string(),
    });

    let lines = parse_lines(&sink.into_inner());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["seq"], 1);
    assert_eq!(lines[1]["seq"], 2);
    assert_eq!(lines[0]["event"], "listener_registered");
    assert_eq!(lines[0]["platform"], "bukkit");
    assert_eq!(lines[1]["event"], "extension_skipped");
    assert_eq!(lines[1]["reason"], "capability not granted");
    for line in &lines {
        assert!(line["timestamp_ms"].as_i64().unwrap() > 0);
        assert!(line["time"].as_str().is_some());
    }
}

#[test]
fn disabled_config_yields_silent_sink() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("audit.jsonl");
    let config = AuditConfig {
        enabled: false,
        path: Some(path.display().to_string()),
    };

    let sink = audit_sink_from_config(&config).unwrap();
    sink.record(&BridgeAuditEvent::ListenerRegistered {
        platform: Platform::Bungee,
    });
    assert!(!path.exists());
}

#[test]
fn enabled_config_appends_to_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("audit.jsonl");
    fs::write(&path, "").unwrap();
    let config = AuditConfig {
        enabled: true,
        path: Some(path.display().to_string()),
    };

    let first = audit_sink_from_config(&config).unwrap();
    first.record(&BridgeAuditEvent::ListenerRegistered {
        platform: Platform::Bukkit,
    });
    drop(first);
    let second = audit_sink_from_config(&config).unwrap();
    second.record(&BridgeAuditEvent::ListenerRegistered {
        platform: Platform::Bungee,
    });
    drop(second);

    let lines = parse_lines(&fs::read(&path).unwrap());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["platform"], "bukkit");
    assert_eq!(lines[1]["platform"], "bungee");
}

#[test]
fn unopenable_audit_path_is_reported() {
    let temp = tempfile::tempdir().unwrap();
    let config = AuditConfig {
        enabled: true,
        path: Some(temp.path().join("missing").join("audit.jsonl").display().to_string()),
    };
    assert!(audit_sink_from_config(&config).is_err());
}

#[test]
fn factory_probes_are_written_to_the_audit_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("audit.jsonl");
    let config = AuditConfig {
        enabled: true,
        path: Some(path.display().to_string()),
    };
    let sink = audit_sink_from_config(&config).unwrap();
    let factory = ExtensionFactory::with_audit(
        Arc::new(StaticFeatureResolver::new([common::SUBSYSTEM_MARKER])),
        Arc::new(StaticCapabilityRegistry::new([common::CAPABILITY])),
        Arc::new(InMemoryPunishmentSubsystem::new()),
        BridgeConfig::default(),
        sink,
    );

    assert!(factory.create_extension().is_some());

    let events: Vec<String> = parse_lines(&fs::read(&path).unwrap())
        .iter()
        .map(|line| line["event"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(events, vec!["feature_probed", "capability_checked", "extension_created"]);
}
