// crates/punishment-bridge/src/lib.rs
// ============================================================================
// Module: Punishment Bridge Library
// Description: Capability-gated punishment data bridge for an analytics host.
// Purpose: Wire the probe, providers, listeners, config, and audit together.
// Dependencies: punishment-bridge-{config, core, listeners, providers}, serde_json
// ============================================================================

//! ## Overview
//! The punishment bridge exposes ban, mute, and warning facts from an
//! optional punishment subsystem to an analytics host, and tells the host
//! when those facts change. [`ExtensionFactory`] is the entry point.
//! Invariants:
//! - The extension and listeners exist only when the subsystem is installed
//!   and the host grants the required capability.
//! - Absence is never an error; `NotReady` is the only provider failure.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod factory;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::JsonLineAuditSink;
pub use audit::audit_sink_from_config;
pub use factory::ExtensionFactory;
pub use factory::PlatformHandles;
