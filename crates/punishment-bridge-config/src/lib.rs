// crates/punishment-bridge-config/src/lib.rs
// ============================================================================
// Module: Punishment Bridge Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for punishment-bridge.toml semantics.
// Dependencies: punishment-bridge-core, serde, toml
// ============================================================================

//! ## Overview
//! `punishment-bridge-config` defines the configuration model for the
//! punishment bridge: which subsystem marker and host capability gate the
//! extension, which platforms are probed, and where audit records go. It
//! provides strict, fail-closed validation and a canonical TOML example.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
