// crates/punishment-bridge-core/src/core/audit.rs
// ============================================================================
// Module: Bridge Audit Events
// Description: Structured events emitted while probing, registering, and forwarding.
// Purpose: Give operators a record of why the bridge did or did not activate.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Audit events are the bridge's only logging surface. They are plain data
//! handed to an injected [`crate::BridgeAuditSink`]; formatting and delivery
//! belong to the sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::identifiers::CapabilityId;
use crate::core::identifiers::FeatureId;
use crate::core::identifiers::PlayerName;
use crate::core::platform::Platform;
use crate::core::punishment::ChangeKind;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Structured bridge audit event.
///
/// # Invariants
/// - Event tags are stable snake_case labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BridgeAuditEvent {
    /// An optional feature was probed.
    FeatureProbed {
        /// Probed feature.
        feature: FeatureId,
        /// Whether the feature resolved.
        loadable: bool,
    },
    /// A host capability was checked.
    CapabilityChecked {
        /// Checked capability.
        capability: CapabilityId,
        /// Whether the host grants it.
        granted: bool,
    },
    /// The provider graph was constructed.
    ExtensionCreated {
        /// Extension name.
        extension: String,
        /// Number of providers in the graph.
        providers: usize,
    },
    /// The provider graph was not constructed.
    ExtensionSkipped {
        /// Extension name.
        extension: String,
        /// Reason the graph was skipped.
        reason: String,
    },
    /// A listener adapter was registered with its platform.
    ListenerRegistered {
        /// Platform the adapter subscribed to.
        platform: Platform,
    },
    /// A listener adapter was not registered.
    ListenerSkipped {
        /// Platform that was skipped.
        platform: Platform,
        /// Reason the adapter was skipped.
        reason: String,
    },
    /// A change notification was forwarded to the host.
    ChangeForwarded {
        /// Platform that delivered the notification.
        platform: Platform,
        /// Punish or revoke.
        change: ChangeKind,
        /// Affected player name.
        player: PlayerName,
    },
    /// The host rejected a forwarded change notification.
    ChangeDropped {
        /// Platform that delivered the notification.
        platform: Platform,
        /// Punish or revoke.
        change: ChangeKind,
        /// Affected player name.
        player: PlayerName,
        /// Host error message.
        error: String,
    },
}

impl BridgeAuditEvent {
    /// Returns the stable event label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FeatureProbed { .. } => "feature_probed",
            Self::CapabilityChecked { .. } => "capability_checked",
            Self::ExtensionCreated { .. } => "extension_created",
            Self::ExtensionSkipped { .. } => "extension_skipped",
            Self::ListenerRegistered { .. } => "listener_registered",
            Self::ListenerSkipped { .. } => "listener_skipped",
            Self::ChangeForwarded { .. } => "change_forwarded",
            Self::ChangeDropped { .. } => "change_dropped",
        }
    }
}
