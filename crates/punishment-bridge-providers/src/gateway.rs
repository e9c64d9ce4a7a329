// crates/punishment-bridge-providers/src/gateway.rs
// ============================================================================
// Module: Punishment Gateway
// Description: Read-through adapter over the optional punishment subsystem.
// Purpose: Translate subsystem readiness into the provider-level NotReady signal.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! [`PunishmentGateway`] is the only path from providers to the punishment
//! subsystem. It obtains the manager on every call, because the subsystem may
//! finish initializing (or lose its storage backend) at any point after the
//! bridge starts.
//! Invariants:
//! - The manager handle is never cached.
//! - No call writes to the subsystem.
//! - An unready manager fails immediately with [`ProviderError::NotReady`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use punishment_bridge_core::PlayerName;
use punishment_bridge_core::PunishmentManager;
use punishment_bridge_core::PunishmentRecord;
use punishment_bridge_core::PunishmentSubsystem;
use punishment_bridge_core::PunishmentUuid;
use punishment_bridge_core::SubsystemError;

use crate::descriptor::ProviderError;

// ============================================================================
// SECTION: Gateway
// ============================================================================

/// Read-only gateway to the punishment subsystem.
#[derive(Clone)]
pub struct PunishmentGateway {
    /// Subsystem being wrapped.
    subsystem: Arc<dyn PunishmentSubsystem>,
}

impl PunishmentGateway {
    /// Creates a gateway over the subsystem.
    #[must_use]
    pub fn new(subsystem: Arc<dyn PunishmentSubsystem>) -> Self {
        Self {
            subsystem,
        }
    }

    /// Resolves a player name to the subsystem identifier.
    ///
    /// `None` means the player is unknown, which is not an error.
    #[must_use]
    pub fn uuid_for(&self, name: &PlayerName) -> Option<PunishmentUuid> {
        self.subsystem.uuid_for(name)
    }

    /// Returns a fresh manager handle.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when the subsystem is not initialized.
    pub fn manager(&self) -> Result<Arc<dyn PunishmentManager>, ProviderError> {
        self.subsystem.manager().map_err(|err| match err {
            SubsystemError::Uninitialized(reason) => ProviderError::NotReady(reason),
        })
    }

    /// Returns true when the player has an active ban.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when the subsystem is not initialized.
    pub fn is_banned(&self, uuid: &PunishmentUuid) -> Result<bool, ProviderError> {
        Ok(self.manager()?.is_banned(uuid))
    }

    /// Returns true when the player has an active mute.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when the subsystem is not initialized.
    pub fn is_muted(&self, uuid: &PunishmentUuid) -> Result<bool, ProviderError> {
        Ok(self.manager()?.is_muted(uuid))
    }

    /// Counts the player's warnings that have not expired.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when the subsystem is not initialized.
    pub fn active_warning_count(&self, uuid: &PunishmentUuid) -> Result<u64, ProviderError> {
        let warnings = self.manager()?.warnings(uuid);
        let count = warnings.iter().filter(|warning| !warning.expired).count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    /// Returns the player's active ban.
    ///
    /// `None` covers both "not banned" and a ban flag without a record.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when the subsystem is not initialized.
    pub fn current_ban(
        &self,
        uuid: &PunishmentUuid,
    ) -> Result<Option<PunishmentRecord>, ProviderError> {
        Ok(self.manager()?.ban(uuid))
    }

    /// Returns the player's active mute.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when the subsystem is not initialized.
    pub fn current_mute(
        &self,
        uuid: &PunishmentUuid,
    ) -> Result<Option<PunishmentRecord>, ProviderError> {
        Ok(self.manager()?.mute(uuid))
    }
}
