// crates/punishment-bridge-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and deployment templates.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for `punishment-bridge.toml`. Every value shown is the
//! default, so loading the example is equivalent to loading an empty file
//! with auditing switched on.

/// Returns a canonical example `punishment-bridge.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[extension]
name = "AdvancedBan"
subsystem_marker = "me.leoko.advancedban.Universal"
required_capability = "DATA_EXTENSION_SHOW_IN_PLAYER_TABLE"
host_plugin = "Plan"

[platforms.bukkit]
enabled = true
marker = "org.bukkit.event.EventHandler"

[platforms.bungee]
enabled = true
marker = "net.md_5.bungee.event.EventHandler"

[audit]
enabled = true
path = "punishment-bridge-audit.jsonl"
"#,
    )
}
