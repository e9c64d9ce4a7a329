// crates/punishment-bridge-core/src/lib.rs
// ============================================================================
// Module: Punishment Bridge Core Library
// Description: Public API surface for the Punishment Bridge core.
// Purpose: Expose the punishment data model, collaborator interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Punishment Bridge core defines the read-only data model shared between an
//! optional punishment subsystem and a consuming analytics host, plus the
//! backend-agnostic interfaces both sides are reached through. It owns no
//! threads and no storage; every collaborator is injected.
//! Invariants:
//! - Absence (missing feature, missing capability, unknown player) is a value, never an error.
//! - Subsystem readiness is read on every call and never cached.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::BridgeAuditSink;
pub use interfaces::Caller;
pub use interfaces::CallerError;
pub use interfaces::CapabilityRegistry;
pub use interfaces::FeatureResolver;
pub use interfaces::NoopAuditSink;
pub use interfaces::PunishmentManager;
pub use interfaces::PunishmentSubsystem;
pub use interfaces::SubsystemError;
pub use runtime::CapabilityProbe;
pub use runtime::InMemoryPunishmentSubsystem;
pub use runtime::StaticCapabilityRegistry;
pub use runtime::StaticFeatureResolver;
