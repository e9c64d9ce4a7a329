// crates/punishment-bridge-core/src/core/mod.rs
// ============================================================================
// Module: Punishment Bridge Core Types
// Description: Canonical punishment records, identifiers, and audit events.
// Purpose: Provide stable, serializable types shared by providers and listeners.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Core types describe punishment snapshots read from the optional subsystem,
//! the identifiers used to address players, features and capabilities, and the
//! structured audit events emitted by the bridge.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod identifiers;
pub mod platform;
pub mod punishment;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::BridgeAuditEvent;
pub use identifiers::CapabilityId;
pub use identifiers::ConditionName;
pub use identifiers::FeatureId;
pub use identifiers::PlayerId;
pub use identifiers::PlayerName;
pub use identifiers::ProviderKey;
pub use identifiers::PunishmentUuid;
pub use platform::Platform;
pub use punishment::ChangeKind;
pub use punishment::PunishmentCategory;
pub use punishment::PunishmentChange;
pub use punishment::PunishmentKind;
pub use punishment::PunishmentRecord;
pub use time::Expiry;
pub use time::Timestamp;
