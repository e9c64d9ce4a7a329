// crates/punishment-bridge-providers/src/lib.rs
// ============================================================================
// Module: Punishment Bridge Providers
// Description: Punishment gateway, provider graph, and the punishment extension.
// Purpose: Compute per-player punishment facts on demand for the analytics host.
// Dependencies: punishment-bridge-core, serde, thiserror
// ============================================================================

//! ## Overview
//! This crate wraps the optional punishment subsystem in a read-through
//! [`PunishmentGateway`] and exposes a validated [`ProviderGraph`] of
//! condition-gated providers built on top of it.
//! Invariants:
//! - Providers hold no mutable state and are safe to evaluate concurrently.
//! - [`ProviderError::NotReady`] is the only failure crossing a provider call.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod descriptor;
pub mod extension;
pub mod gateway;
pub mod graph;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use descriptor::Color;
pub use descriptor::Decoration;
pub use descriptor::FormatType;
pub use descriptor::Icon;
pub use descriptor::IconFamily;
pub use descriptor::ProviderDescriptor;
pub use descriptor::ProviderError;
pub use descriptor::ProviderValue;
pub use descriptor::ValueKind;
pub use extension::punishment_extension;
pub use extension::punishment_extension_named;
pub use gateway::PunishmentGateway;
pub use graph::CallEvent;
pub use graph::EvaluatedValue;
pub use graph::ExtensionDeclaration;
pub use graph::ExtensionRegistrar;
pub use graph::GraphError;
pub use graph::PlayerEvaluation;
pub use graph::PluginInfo;
pub use graph::ProviderDeclaration;
pub use graph::ProviderGraph;
pub use graph::ProviderGraphBuilder;
pub use graph::RegistrationError;
