// crates/punishment-bridge-core/src/runtime/probe.rs
// ============================================================================
// Module: Capability Probe
// Description: Side-effect-free checks for optional features and host capabilities.
// Purpose: Decide at startup whether the bridge may activate.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`CapabilityProbe`] answers two questions: can an optional feature be
//! loaded, and does the host grant a runtime capability. Any resolution
//! failure, including a panicking resolver, is reported as absence.
//! Invariants:
//! - Probing never fails outward and never mutates collaborator state.
//! - The composite check only consults the capability registry once the
//!   marker feature resolved.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::panic::AssertUnwindSafe;
use std::panic::catch_unwind;
use std::sync::Arc;

use crate::core::BridgeAuditEvent;
use crate::core::CapabilityId;
use crate::core::FeatureId;
use crate::interfaces::BridgeAuditSink;
use crate::interfaces::CapabilityRegistry;
use crate::interfaces::FeatureResolver;
use crate::interfaces::NoopAuditSink;

// ============================================================================
// SECTION: Probe
// ============================================================================

/// Feature and capability probe.
#[derive(Clone)]
pub struct CapabilityProbe {
    /// Resolver for optional features.
    features: Arc<dyn FeatureResolver>,
    /// Host capability registry.
    capabilities: Arc<dyn CapabilityRegistry>,
    /// Audit sink for probe outcomes.
    audit: Arc<dyn BridgeAuditSink>,
}

impl CapabilityProbe {
    /// Creates a probe that does not audit its outcomes.
    #[must_use]
    pub fn new(
        features: Arc<dyn FeatureResolver>,
        capabilities: Arc<dyn CapabilityRegistry>,
    ) -> Self {
        Self::with_audit(features, capabilities, Arc::new(NoopAuditSink))
    }

    /// Creates a probe that records every outcome to the audit sink.
    #[must_use]
    pub fn with_audit(
        features: Arc<dyn FeatureResolver>,
        capabilities: Arc<dyn CapabilityRegistry>,
        audit: Arc<dyn BridgeAuditSink>,
    ) -> Self {
        Self {
            features,
            capabilities,
            audit,
        }
    }

    /// Returns true when the optional feature resolves.
    #[must_use]
    pub fn is_feature_loadable(&self, feature: &FeatureId) -> bool {
        let loadable =
            catch_unwind(AssertUnwindSafe(|| self.features.is_loadable(feature))).unwrap_or(false);
        self.audit.record(&BridgeAuditEvent::FeatureProbed {
            feature: feature.clone(),
            loadable,
        });
        loadable
    }

    /// Returns true when the host grants the runtime capability.
    #[must_use]
    pub fn has_runtime_capability(&self, capability: &CapabilityId) -> bool {
        let granted =
            catch_unwind(AssertUnwindSafe(|| self.capabilities.has_capability(capability)))
                .unwrap_or(false);
        self.audit.record(&BridgeAuditEvent::CapabilityChecked {
            capability: capability.clone(),
            granted,
        });
        granted
    }

    /// Composite activation check: the marker feature resolves and the host
    /// grants the capability.
    #[must_use]
    pub fn is_available(&self, marker: &FeatureId, capability: &CapabilityId) -> bool {
        self.is_feature_loadable(marker) && self.has_runtime_capability(capability)
    }
}
