// crates/punishment-bridge-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Collaborators
// Description: Mutex-backed subsystem plus static feature and capability sets.
// Purpose: Provide deterministic collaborators for embedding hosts and tests.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`InMemoryPunishmentSubsystem`] models an optional punishment subsystem
//! whose manager may not be initialized yet. Its manager handle reads shared
//! state on every call, so a punishment issued after the handle was obtained
//! is visible immediately.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::core::CapabilityId;
use crate::core::FeatureId;
use crate::core::PlayerName;
use crate::core::PunishmentCategory;
use crate::core::PunishmentRecord;
use crate::core::PunishmentUuid;
use crate::interfaces::CapabilityRegistry;
use crate::interfaces::FeatureResolver;
use crate::interfaces::PunishmentManager;
use crate::interfaces::PunishmentSubsystem;
use crate::interfaces::SubsystemError;

// ============================================================================
// SECTION: Static Sets
// ============================================================================

/// Feature resolver backed by a fixed set of loadable feature names.
#[derive(Debug, Clone, Default)]
pub struct StaticFeatureResolver {
    /// Loadable feature names.
    loadable: BTreeSet<String>,
}

impl StaticFeatureResolver {
    /// Creates a resolver that reports the given features as loadable.
    #[must_use]
    pub fn new<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loadable: features.into_iter().map(Into::into).collect(),
        }
    }
}

impl FeatureResolver for StaticFeatureResolver {
    fn is_loadable(&self, feature: &FeatureId) -> bool {
        self.loadable.contains(feature.as_str())
    }
}

/// Capability registry backed by a fixed set of granted capabilities.
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilityRegistry {
    /// Granted capability names.
    granted: BTreeSet<String>,
}

impl StaticCapabilityRegistry {
    /// Creates a registry that grants the given capabilities.
    #[must_use]
    pub fn new<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: capabilities.into_iter().map(Into::into).collect(),
        }
    }
}

impl CapabilityRegistry for StaticCapabilityRegistry {
    fn has_capability(&self, capability: &CapabilityId) -> bool {
        self.granted.contains(capability.as_str())
    }
}

// ============================================================================
// SECTION: In-Memory Subsystem
// ============================================================================

/// Shared subsystem state.
#[derive(Debug, Default)]
struct SubsystemState {
    /// `None` when ready, otherwise the reason the manager is unavailable.
    uninitialized: Option<String>,
    /// Identity index from player name to subsystem identifier.
    identities: BTreeMap<PlayerName, PunishmentUuid>,
    /// Every recorded punishment in issue order.
    punishments: Vec<PunishmentRecord>,
}

impl SubsystemState {
    /// Returns the most recently issued unexpired record in the category.
    fn active(
        &self,
        uuid: &PunishmentUuid,
        category: PunishmentCategory,
    ) -> Option<&PunishmentRecord> {
        self.punishments
            .iter()
            .filter(|record| {
                record.uuid == *uuid && record.kind.category() == category && !record.expired
            })
            .max_by_key(|record| record.issued_at)
    }
}

/// Locks the state, recovering from poisoning.
fn lock(state: &Mutex<SubsystemState>) -> MutexGuard<'_, SubsystemState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory punishment subsystem for tests and examples.
///
/// # Invariants
/// - Readiness is evaluated on every [`PunishmentSubsystem::manager`] call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPunishmentSubsystem {
    /// State shared with every manager handle.
    state: Arc<Mutex<SubsystemState>>,
}

impl InMemoryPunishmentSubsystem {
    /// Creates a ready subsystem with no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subsystem whose manager is not yet initialized.
    #[must_use]
    pub fn uninitialized(reason: impl Into<String>) -> Self {
        let subsystem = Self::default();
        subsystem.mark_uninitialized(reason);
        subsystem
    }

    /// Marks the manager as initialized.
    pub fn mark_ready(&self) {
        lock(&self.state).uninitialized = None;
    }

    /// Marks the manager as not initialized.
    pub fn mark_uninitialized(&self, reason: impl Into<String>) {
        lock(&self.state).uninitialized = Some(reason.into());
    }

    /// Adds a player to the identity index without punishing them.
    pub fn register_player(&self, name: PlayerName, uuid: PunishmentUuid) {
        lock(&self.state).identities.insert(name, uuid);
    }

    /// Records a punishment, indexing the punished player's identity.
    pub fn punish(&self, record: PunishmentRecord) {
        let mut state = lock(&self.state);
        state.identities.insert(record.player_name.clone(), record.uuid.clone());
        state.punishments.push(record);
    }

    /// Removes the active punishment in the category and returns it.
    pub fn revoke(
        &self,
        uuid: &PunishmentUuid,
        category: PunishmentCategory,
    ) -> Option<PunishmentRecord> {
        let mut state = lock(&self.state);
        let active = state.active(uuid, category)?.clone();
        let index = state.punishments.iter().position(|record| *record == active)?;
        Some(state.punishments.remove(index))
    }
}

impl PunishmentSubsystem for InMemoryPunishmentSubsystem {
    fn uuid_for(&self, name: &PlayerName) -> Option<PunishmentUuid> {
        lock(&self.state).identities.get(name).cloned()
    }

    fn manager(&self) -> Result<Arc<dyn PunishmentManager>, SubsystemError> {
        if let Some(reason) = &lock(&self.state).uninitialized {
            return Err(SubsystemError::Uninitialized(reason.clone()));
        }
        Ok(Arc::new(InMemoryPunishmentManager {
            state: Arc::clone(&self.state),
        }))
    }
}

/// Manager handle reading the shared in-memory state.
struct InMemoryPunishmentManager {
    /// State shared with the owning subsystem.
    state: Arc<Mutex<SubsystemState>>,
}

impl PunishmentManager for InMemoryPunishmentManager {
    fn is_banned(&self, uuid: &PunishmentUuid) -> bool {
        lock(&self.state).active(uuid, PunishmentCategory::Ban).is_some()
    }

    fn is_muted(&self, uuid: &PunishmentUuid) -> bool {
        lock(&self.state).active(uuid, PunishmentCategory::Mute).is_some()
    }

    fn ban(&self, uuid: &PunishmentUuid) -> Option<PunishmentRecord> {
        lock(&self.state).active(uuid, PunishmentCategory::Ban).cloned()
    }

    fn mute(&self, uuid: &PunishmentUuid) -> Option<PunishmentRecord> {
        lock(&self.state).active(uuid, PunishmentCategory::Mute).cloned()
    }

    fn warnings(&self, uuid: &PunishmentUuid) -> Vec<PunishmentRecord> {
        lock(&self.state)
            .punishments
            .iter()
            .filter(|record| {
                record.uuid == *uuid && record.kind.category() == PunishmentCategory::Warning
            })
            .cloned()
            .collect()
    }
}
