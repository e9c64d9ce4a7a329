// crates/punishment-bridge-core/src/core/punishment.rs
// ============================================================================
// Module: Punishment Records
// Description: Read-only snapshots of bans, mutes, and warnings.
// Purpose: Model the punishment subsystem's records as seen by the bridge.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Punishment records are owned and mutated exclusively by the external
//! subsystem. The bridge only reads snapshots and derives facts from them.
//! Invariants:
//! - Only [`PunishmentKind::Ban`], [`PunishmentKind::IpBan`], and
//!   [`PunishmentKind::Mute`] are treated as permanent-style kinds; every other
//!   kind is reported as one that will expire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::PlayerName;
use crate::core::identifiers::PunishmentUuid;
use crate::core::time::Expiry;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Kinds
// ============================================================================

/// Punishment kind as recorded by the subsystem.
///
/// # Invariants
/// - Wire names are stable snake_case labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentKind {
    /// Permanent ban.
    Ban,
    /// Time-limited ban.
    TempBan,
    /// Permanent ban by network address.
    IpBan,
    /// Time-limited ban by network address.
    TempIpBan,
    /// Permanent mute.
    Mute,
    /// Time-limited mute.
    TempMute,
    /// Warning.
    Warning,
    /// Time-limited warning.
    TempWarning,
    /// Kick (history only).
    Kick,
    /// Staff note (history only).
    Note,
}

impl PunishmentKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::TempBan => "temp_ban",
            Self::IpBan => "ip_ban",
            Self::TempIpBan => "temp_ip_ban",
            Self::Mute => "mute",
            Self::TempMute => "temp_mute",
            Self::Warning => "warning",
            Self::TempWarning => "temp_warning",
            Self::Kick => "kick",
            Self::Note => "note",
        }
    }

    /// Returns the category the kind belongs to.
    #[must_use]
    pub const fn category(self) -> PunishmentCategory {
        match self {
            Self::Ban | Self::TempBan | Self::IpBan | Self::TempIpBan => PunishmentCategory::Ban,
            Self::Mute | Self::TempMute => PunishmentCategory::Mute,
            Self::Warning | Self::TempWarning => PunishmentCategory::Warning,
            Self::Kick => PunishmentCategory::Kick,
            Self::Note => PunishmentCategory::Note,
        }
    }

    /// Returns true for the kinds the subsystem issues without an end time.
    #[must_use]
    pub const fn is_permanent_style(self) -> bool {
        matches!(self, Self::Ban | Self::IpBan | Self::Mute)
    }

    /// Returns true when a record of this kind is reported as expiring.
    ///
    /// Applied identically to ban and mute records.
    #[must_use]
    pub const fn will_expire(self) -> bool {
        !self.is_permanent_style()
    }

    /// Returns true for the explicitly time-limited kinds.
    #[must_use]
    pub const fn is_temporary(self) -> bool {
        matches!(self, Self::TempBan | Self::TempIpBan | Self::TempMute | Self::TempWarning)
    }
}

/// Coarse grouping of punishment kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentCategory {
    /// Any ban kind.
    Ban,
    /// Any mute kind.
    Mute,
    /// Any warning kind.
    Warning,
    /// Kick.
    Kick,
    /// Note.
    Note,
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// Snapshot of a single punishment.
///
/// # Invariants
/// - `expired` is only meaningful for warning kinds; active bans and mutes are
///   reported with `expired = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunishmentRecord {
    /// Kind of punishment.
    pub kind: PunishmentKind,
    /// Name of the punished player.
    pub player_name: PlayerName,
    /// Subsystem identifier of the punished player.
    pub uuid: PunishmentUuid,
    /// Name of the operator who issued the punishment.
    pub operator: String,
    /// Free-form reason given by the operator.
    pub reason: String,
    /// When the punishment was issued.
    pub issued_at: Timestamp,
    /// When the punishment ends.
    pub expires_at: Expiry,
    /// Whether the record has expired (warnings only).
    pub expired: bool,
}

// ============================================================================
// SECTION: Change Notifications
// ============================================================================

/// Direction of a punishment change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A punishment was issued.
    Punish,
    /// A punishment was revoked.
    Revoke,
}

impl ChangeKind {
    /// Returns a stable label for the change.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Punish => "punish",
            Self::Revoke => "revoke",
        }
    }
}

/// Platform-neutral punishment change delivered to listener adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunishmentChange {
    /// Whether the punishment was issued or revoked.
    pub kind: ChangeKind,
    /// Punishment payload carried by the notification.
    pub punishment: PunishmentRecord,
}

impl PunishmentChange {
    /// Returns the name of the affected player.
    #[must_use]
    pub const fn player_name(&self) -> &PlayerName {
        &self.punishment.player_name
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
