// crates/punishment-bridge-core/src/core/platform.rs
// ============================================================================
// Module: Event Source Platforms
// Description: Host platforms that can deliver punishment notifications.
// Purpose: Name the mutually exclusive event sources probed at startup.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A process normally runs under exactly one platform, but each platform is
//! probed independently so more than one may be reported as loadable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::FeatureId;

// ============================================================================
// SECTION: Platform
// ============================================================================

/// Event source platform.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Game server platform with a plugin manager and annotated event handlers.
    Bukkit,
    /// Proxy platform with a plugin manager keyed by plugin name.
    Bungee,
}

impl Platform {
    /// All known platforms in probe order.
    pub const ALL: [Self; 2] = [Self::Bukkit, Self::Bungee];

    /// Returns a stable label for the platform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bukkit => "bukkit",
            Self::Bungee => "bungee",
        }
    }

    /// Returns the marker feature whose presence identifies the platform.
    #[must_use]
    pub fn default_marker(self) -> FeatureId {
        match self {
            Self::Bukkit => FeatureId::new("org.bukkit.event.EventHandler"),
            Self::Bungee => FeatureId::new("net.md_5.bungee.event.EventHandler"),
        }
    }
}
