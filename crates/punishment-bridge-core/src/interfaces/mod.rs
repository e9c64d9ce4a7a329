// crates/punishment-bridge-core/src/interfaces/mod.rs
// ============================================================================
// Module: Punishment Bridge Interfaces
// Description: Backend-agnostic interfaces for the subsystem, host, and audit.
// Purpose: Define the contract surfaces the bridge consumes.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces describe every external collaborator of the bridge: feature
//! resolution, the host's capability registry and update channel, the
//! optional punishment subsystem, and the audit sink. Implementations are
//! invoked from arbitrary threads and must be `Send + Sync`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::BridgeAuditEvent;
use crate::core::CapabilityId;
use crate::core::FeatureId;
use crate::core::PlayerId;
use crate::core::PlayerName;
use crate::core::PunishmentRecord;
use crate::core::PunishmentUuid;

// ============================================================================
// SECTION: Feature Detection
// ============================================================================

/// Resolves whether an optional feature can be loaded in this process.
pub trait FeatureResolver: Send + Sync {
    /// Returns true when the feature resolves. Absence is `false`, never an error.
    fn is_loadable(&self, feature: &FeatureId) -> bool;
}

/// Host registry of optional runtime capabilities.
pub trait CapabilityRegistry: Send + Sync {
    /// Returns true when the host grants the capability.
    fn has_capability(&self, capability: &CapabilityId) -> bool;
}

// ============================================================================
// SECTION: Punishment Subsystem
// ============================================================================

/// Punishment subsystem errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsystemError {
    /// The subsystem's manager has not finished initializing.
    #[error("punishment subsystem not initialized: {0}")]
    Uninitialized(String),
}

/// Read-only view of the subsystem's punishment state.
///
/// # Invariants
/// - Methods never write to the subsystem.
pub trait PunishmentManager: Send + Sync {
    /// Returns true when the player has an active ban.
    fn is_banned(&self, uuid: &PunishmentUuid) -> bool;

    /// Returns true when the player has an active mute.
    fn is_muted(&self, uuid: &PunishmentUuid) -> bool;

    /// Returns the player's active ban, if any.
    fn ban(&self, uuid: &PunishmentUuid) -> Option<PunishmentRecord>;

    /// Returns the player's active mute, if any.
    fn mute(&self, uuid: &PunishmentUuid) -> Option<PunishmentRecord>;

    /// Returns every warning recorded for the player, expired or not.
    fn warnings(&self, uuid: &PunishmentUuid) -> Vec<PunishmentRecord>;
}

/// Optional punishment subsystem.
pub trait PunishmentSubsystem: Send + Sync {
    /// Resolves a player name through the subsystem's identity index.
    ///
    /// `None` means the player is unknown to the subsystem.
    fn uuid_for(&self, name: &PlayerName) -> Option<PunishmentUuid>;

    /// Returns the punishment manager.
    ///
    /// # Errors
    ///
    /// Returns [`SubsystemError::Uninitialized`] until the subsystem is ready.
    fn manager(&self) -> Result<Arc<dyn PunishmentManager>, SubsystemError>;
}

// ============================================================================
// SECTION: Host Update Channel
// ============================================================================

/// Host update channel errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallerError {
    /// The host refused or could not accept the update.
    #[error("host rejected player update: {0}")]
    Rejected(String),
}

/// Host channel used to request re-evaluation of a player's providers.
pub trait Caller: Send + Sync {
    /// Signals that data for the player changed.
    ///
    /// # Errors
    ///
    /// Returns [`CallerError`] when the host cannot accept the update.
    fn update_player_data(
        &self,
        player_id: Option<&PlayerId>,
        player_name: &PlayerName,
    ) -> Result<(), CallerError>;
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Sink for structured bridge audit events.
pub trait BridgeAuditSink: Send + Sync {
    /// Records an audit event. Must not fail the caller.
    fn record(&self, event: &BridgeAuditEvent);
}

/// No-op audit sink.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopAuditSink;

impl BridgeAuditSink for NoopAuditSink {
    fn record(&self, _event: &BridgeAuditEvent) {}
}
