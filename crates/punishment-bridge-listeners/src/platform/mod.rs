// crates/punishment-bridge-listeners/src/platform/mod.rs
// ============================================================================
// Module: Platform Variants
// Description: Event source platforms and their listener adapters.
// Purpose: Group the per-platform APIs behind the shared adapter contract.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! Each platform exposes its own plugin manager and event types; the adapters
//! differ only in how they subscribe.

pub mod bukkit;
pub mod bungee;
pub mod memory;

pub use bukkit::BukkitListener;
pub use bukkit::BukkitListenerAdapter;
pub use bukkit::BukkitPluginManager;
pub use bukkit::BukkitPunishmentEvent;
pub use bukkit::BukkitRevokePunishmentEvent;
pub use bungee::BungeeListener;
pub use bungee::BungeeListenerAdapter;
pub use bungee::BungeePluginManager;
pub use bungee::BungeePunishmentEvent;
pub use bungee::BungeeRevokePunishmentEvent;
pub use memory::InMemoryBukkitServer;
pub use memory::InMemoryBungeeProxy;
