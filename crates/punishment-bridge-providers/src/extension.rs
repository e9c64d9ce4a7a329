// crates/punishment-bridge-providers/src/extension.rs
// ============================================================================
// Module: Punishment Data Extension
// Description: The ban, mute, and warning provider graph.
// Purpose: Expose per-player punishment facts to the analytics host.
// Dependencies: punishment-bridge-core
// ============================================================================

//! ## Overview
//! [`punishment_extension`] builds the fixed provider graph:
//!
//! ```text
//! banned (100) ─┬─ ban_issuer (99), ban_issue_date (98), ban_reason (95)
//!               └─ ban_will_expire (97) ── ban_expire_date (96)
//! muted (50)  ──┬─ mute_issuer (49), mute_issue_date (48), mute_reason (45)
//!               └─ mute_will_expire (47) ── mute_expire_date (46)
//! warnings (25)
//! ```
//!
//! Every compute resolves the player's identifier through the gateway and
//! treats an unknown player as "no data". Gated providers re-read the current
//! record on each call and answer "no data" when it is gone, since hosts may
//! evaluate them independently of their conditions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use punishment_bridge_core::PlayerName;
use punishment_bridge_core::PunishmentRecord;

use crate::descriptor::Color;
use crate::descriptor::Decoration;
use crate::descriptor::FormatType;
use crate::descriptor::Icon;
use crate::descriptor::ProviderDescriptor;
use crate::descriptor::ProviderError;
use crate::gateway::PunishmentGateway;
use crate::graph::CallEvent;
use crate::graph::GraphError;
use crate::graph::PluginInfo;
use crate::graph::ProviderGraph;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Extension name shown by the host.
pub const EXTENSION_NAME: &str = "AdvancedBan";

/// Condition: the player has an active ban.
pub const CONDITION_BANNED: &str = "banned";
/// Condition: the player's ban will expire.
pub const CONDITION_BAN_EXPIRES: &str = "ban_expires";
/// Condition: the player has an active mute.
pub const CONDITION_MUTED: &str = "muted";
/// Condition: the player's mute will expire.
pub const CONDITION_MUTE_EXPIRES: &str = "mute_expires";

/// Provider keys exposed by the extension, in priority order.
pub mod keys {
    /// Whether the player is banned.
    pub const BANNED: &str = "banned";
    /// Operator who issued the ban.
    pub const BAN_ISSUER: &str = "ban_issuer";
    /// When the ban was issued.
    pub const BAN_ISSUE_DATE: &str = "ban_issue_date";
    /// Whether the ban will expire.
    pub const BAN_WILL_EXPIRE: &str = "ban_will_expire";
    /// When the ban ends.
    pub const BAN_EXPIRE_DATE: &str = "ban_expire_date";
    /// Why the ban was issued.
    pub const BAN_REASON: &str = "ban_reason";
    /// Whether the player is muted.
    pub const MUTED: &str = "muted";
    /// Operator who issued the mute.
    pub const MUTE_ISSUER: &str = "mute_issuer";
    /// When the mute was issued.
    pub const MUTE_ISSUE_DATE: &str = "mute_issue_date";
    /// Whether the mute will expire.
    pub const MUTE_WILL_EXPIRE: &str = "mute_will_expire";
    /// When the mute ends.
    pub const MUTE_EXPIRE_DATE: &str = "mute_expire_date";
    /// Why the mute was issued.
    pub const MUTE_REASON: &str = "mute_reason";
    /// Number of unexpired warnings.
    pub const WARNINGS: &str = "warnings";
}

// ============================================================================
// SECTION: Record Access
// ============================================================================

/// Which active record a gated provider reads.
#[derive(Debug, Clone, Copy)]
enum RecordSource {
    /// The active ban.
    Ban,
    /// The active mute.
    Mute,
}

impl RecordSource {
    /// Fetches the player's current record, or `None` when there is no data.
    fn fetch(
        self,
        gateway: &PunishmentGateway,
        player: &PlayerName,
    ) -> Result<Option<PunishmentRecord>, ProviderError> {
        let Some(uuid) = gateway.uuid_for(player) else {
            return Ok(None);
        };
        match self {
            Self::Ban => gateway.current_ban(&uuid),
            Self::Mute => gateway.current_mute(&uuid),
        }
    }
}

/// Builds a provider that projects a field from the current record.
fn record_field<T, F>(
    gateway: &PunishmentGateway,
    source: RecordSource,
    project: F,
) -> impl Fn(&PlayerName) -> Result<Option<T>, ProviderError> + Send + Sync + 'static
where
    T: 'static,
    F: Fn(&PunishmentRecord) -> Option<T> + Send + Sync + 'static,
{
    let gateway = gateway.clone();
    move |player| Ok(source.fetch(&gateway, player)?.as_ref().and_then(&project))
}

/// Builds the "will expire" provider for a record source.
fn will_expire(
    gateway: &PunishmentGateway,
    source: RecordSource,
) -> impl Fn(&PlayerName) -> Result<bool, ProviderError> + Send + Sync + 'static {
    let gateway = gateway.clone();
    move |player| {
        Ok(source.fetch(&gateway, player)?.is_some_and(|record| record.kind.will_expire()))
    }
}

// ============================================================================
// SECTION: Extension
// ============================================================================

/// Builds the punishment provider graph over the gateway.
///
/// # Errors
///
/// Returns [`GraphError`] only if the fixed graph definition is inconsistent.
pub fn punishment_extension(gateway: &PunishmentGateway) -> Result<ProviderGraph, GraphError> {
    punishment_extension_named(gateway, EXTENSION_NAME)
}

/// Builds the punishment provider graph under a custom extension name.
///
/// # Errors
///
/// Returns [`GraphError`] only if the fixed graph definition is inconsistent.
pub fn punishment_extension_named(
    gateway: &PunishmentGateway,
    name: &str,
) -> Result<ProviderGraph, GraphError> {
    let plugin = PluginInfo {
        name: name.to_string(),
        icon: Icon::solid("gavel", Color::Red),
    };
    let mut builder = ProviderGraph::builder(plugin)
        .call_on(CallEvent::PlayerJoin)
        .call_on(CallEvent::PlayerLeave);
    for provider in ban_providers(gateway).into_iter().chain(mute_providers(gateway)) {
        builder = builder.provider(provider);
    }
    builder.provider(warnings_provider(gateway)).build()
}

/// Ban providers, gated by [`CONDITION_BANNED`].
fn ban_providers(gateway: &PunishmentGateway) -> Vec<ProviderDescriptor> {
    let banned = {
        let gateway = gateway.clone();
        move |player: &PlayerName| match gateway.uuid_for(player) {
            Some(uuid) => gateway.is_banned(&uuid),
            None => Ok(false),
        }
    };
    vec![
        ProviderDescriptor::boolean(
            keys::BANNED,
            100,
            Decoration::new(
                "Banned",
                "Is the player banned on AdvancedBan",
                Icon::solid("gavel", Color::Red),
            ),
            banned,
        )
        .producing(CONDITION_BANNED),
        ProviderDescriptor::string(
            keys::BAN_ISSUER,
            99,
            Decoration::new("Operator", "Who banned the player", Icon::solid("user", Color::Red))
                .as_player_name(),
            record_field(gateway, RecordSource::Ban, |record| Some(record.operator.clone())),
        )
        .gated_by(CONDITION_BANNED),
        ProviderDescriptor::number(
            keys::BAN_ISSUE_DATE,
            98,
            Decoration::new(
                "Date",
                "When the ban was issued",
                Icon::regular("calendar", Color::Red),
            )
            .with_format(FormatType::DateYear),
            record_field(gateway, RecordSource::Ban, |record| {
                Some(record.issued_at.as_unix_millis())
            }),
        )
        .gated_by(CONDITION_BANNED),
        ProviderDescriptor::boolean(
            keys::BAN_WILL_EXPIRE,
            97,
            Decoration::new(
                "Will Expire",
                "Is the ban permanent",
                Icon::regular("calendar-check", Color::Red),
            ),
            will_expire(gateway, RecordSource::Ban),
        )
        .gated_by(CONDITION_BANNED)
        .producing(CONDITION_BAN_EXPIRES),
        ProviderDescriptor::number(
            keys::BAN_EXPIRE_DATE,
            96,
            Decoration::new(
                "Ends",
                "When the ban expires",
                Icon::regular("calendar-check", Color::Red),
            )
            .with_format(FormatType::DateYear),
            record_field(gateway, RecordSource::Ban, |record| {
                record.expires_at.timestamp().map(|at| at.as_unix_millis())
            }),
        )
        .gated_by(CONDITION_BAN_EXPIRES),
        ProviderDescriptor::string(
            keys::BAN_REASON,
            95,
            Decoration::new(
                "Reason",
                "Why the ban was issued",
                Icon::regular("comment", Color::Red),
            ),
            record_field(gateway, RecordSource::Ban, |record| Some(record.reason.clone())),
        )
        .gated_by(CONDITION_BANNED),
    ]
}

/// Mute providers, gated by [`CONDITION_MUTED`].
fn mute_providers(gateway: &PunishmentGateway) -> Vec<ProviderDescriptor> {
    let muted = {
        let gateway = gateway.clone();
        move |player: &PlayerName| match gateway.uuid_for(player) {
            Some(uuid) => gateway.is_muted(&uuid),
            None => Ok(false),
        }
    };
    vec![
        ProviderDescriptor::boolean(
            keys::MUTED,
            50,
            Decoration::new(
                "Muted",
                "Is the player muted on AdvancedBan",
                Icon::solid("bell-slash", Color::DeepOrange),
            ),
            muted,
        )
        .producing(CONDITION_MUTED)
        .in_player_table(),
        ProviderDescriptor::string(
            keys::MUTE_ISSUER,
            49,
            Decoration::new(
                "Operator",
                "Who muted the player",
                Icon::solid("user", Color::DeepOrange),
            ),
            record_field(gateway, RecordSource::Mute, |record| Some(record.operator.clone())),
        )
        .gated_by(CONDITION_MUTED),
        ProviderDescriptor::number(
            keys::MUTE_ISSUE_DATE,
            48,
            Decoration::new(
                "Date",
                "When the mute was issued",
                Icon::regular("calendar", Color::DeepOrange),
            )
            .with_format(FormatType::DateYear),
            record_field(gateway, RecordSource::Mute, |record| {
                Some(record.issued_at.as_unix_millis())
            }),
        )
        .gated_by(CONDITION_MUTED),
        ProviderDescriptor::boolean(
            keys::MUTE_WILL_EXPIRE,
            47,
            Decoration::new(
                "Will Expire",
                "Is the mute permanent",
                Icon::regular("calendar-check", Color::DeepOrange),
            ),
            will_expire(gateway, RecordSource::Mute),
        )
        .gated_by(CONDITION_MUTED)
        .producing(CONDITION_MUTE_EXPIRES),
        ProviderDescriptor::number(
            keys::MUTE_EXPIRE_DATE,
            46,
            Decoration::new(
                "Ends",
                "When the mute expires",
                Icon::regular("calendar-check", Color::DeepOrange),
            )
            .with_format(FormatType::DateYear),
            record_field(gateway, RecordSource::Mute, |record| {
                record.expires_at.timestamp().map(|at| at.as_unix_millis())
            }),
        )
        .gated_by(CONDITION_MUTE_EXPIRES),
        ProviderDescriptor::string(
            keys::MUTE_REASON,
            45,
            Decoration::new(
                "Reason",
                "Why the mute was issued",
                Icon::regular("comment", Color::DeepOrange),
            ),
            record_field(gateway, RecordSource::Mute, |record| Some(record.reason.clone())),
        )
        .gated_by(CONDITION_MUTED),
    ]
}

/// Unexpired warning count; never gated.
fn warnings_provider(gateway: &PunishmentGateway) -> ProviderDescriptor {
    let gateway = gateway.clone();
    ProviderDescriptor::number(
        keys::WARNINGS,
        25,
        Decoration::new(
            "Warnings",
            "How many unexpired warnings player has on AdvancedBan",
            Icon::solid("flag", Color::Amber),
        ),
        move |player| {
            let Some(uuid) = gateway.uuid_for(player) else {
                return Ok(Some(0));
            };
            let count = gateway.active_warning_count(&uuid)?;
            Ok(Some(i64::try_from(count).unwrap_or(i64::MAX)))
        },
    )
    .in_player_table()
}
