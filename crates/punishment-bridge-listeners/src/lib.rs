// crates/punishment-bridge-listeners/src/lib.rs
// ============================================================================
// Module: Punishment Bridge Listeners
// Description: Platform listener adapters and host update channels.
// Purpose: Tell the analytics host when a player's punishments change.
// Dependencies: punishment-bridge-core, thiserror, tokio
// ============================================================================

//! ## Overview
//! Listener adapters subscribe to a platform's punish/revoke notifications and
//! forward each one as a single host update through a
//! [`punishment_bridge_core::Caller`].
//! Invariants:
//! - Exactly one host update per notification, in delivery order.
//! - No batching, deduplication, or filtering.
//! - Notification handling never fails outward.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod adapter;
pub mod caller;
pub mod platform;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adapter::ListenerAdapter;
pub use adapter::ListenerError;
pub use adapter::PlatformError;
pub use adapter::PluginHandle;
pub use adapter::PunishmentChangeHandler;
pub use caller::CallbackCaller;
pub use caller::ChannelCaller;
pub use caller::PlayerUpdate;
pub use platform::BukkitListener;
pub use platform::BukkitListenerAdapter;
pub use platform::BukkitPluginManager;
pub use platform::BukkitPunishmentEvent;
pub use platform::BukkitRevokePunishmentEvent;
pub use platform::BungeeListener;
pub use platform::BungeeListenerAdapter;
pub use platform::BungeePluginManager;
pub use platform::BungeePunishmentEvent;
pub use platform::BungeeRevokePunishmentEvent;
pub use platform::InMemoryBukkitServer;
pub use platform::InMemoryBungeeProxy;
