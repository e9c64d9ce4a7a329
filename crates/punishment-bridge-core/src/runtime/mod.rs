// crates/punishment-bridge-core/src/runtime/mod.rs
// ============================================================================
// Module: Punishment Bridge Runtime
// Description: Capability probing and reference in-memory collaborators.
// Purpose: Provide the probe used at startup plus deterministic test doubles.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime holds the capability probe that gates activation and simple
//! in-memory implementations of the collaborator interfaces, suitable for
//! embedding hosts and tests.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod memory;
pub mod probe;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use memory::InMemoryPunishmentSubsystem;
pub use memory::StaticCapabilityRegistry;
pub use memory::StaticFeatureResolver;
pub use probe::CapabilityProbe;
