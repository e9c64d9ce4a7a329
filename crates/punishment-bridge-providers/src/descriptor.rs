// crates/punishment-bridge-providers/src/descriptor.rs
// ============================================================================
// Module: Provider Descriptors
// Description: Typed provider records, values, and display decorations.
// Purpose: Describe lazily computed per-player facts for the analytics host.
// Dependencies: punishment-bridge-core, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`ProviderDescriptor`] pairs a key, value kind, priority and optional
//! condition links with a compute closure. Decorations (text, icon, color,
//! format) are opaque display data: they are serialized for the host but
//! never consulted during evaluation.
//! Invariants:
//! - A descriptor's computed value always matches its declared [`ValueKind`]
//!   or is [`ProviderValue::Absent`]; the typed constructors enforce this.
//! - [`ProviderError::NotReady`] is the only failure a compute may return.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use punishment_bridge_core::ConditionName;
use punishment_bridge_core::PlayerName;
use punishment_bridge_core::ProviderKey;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Provider evaluation errors.
///
/// # Invariants
/// - `NotReady` is temporary; hosts should skip the evaluation and retry later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The punishment subsystem has not finished initializing.
    #[error("punishment subsystem not ready: {0}")]
    NotReady(String),
}

// ============================================================================
// SECTION: Values
// ============================================================================

/// Kind of value a provider produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Boolean fact; may produce a condition.
    Boolean,
    /// Integer fact (counts and epoch-millisecond dates).
    Number,
    /// Text fact.
    String,
}

/// Value computed by a provider for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProviderValue {
    /// Boolean value.
    Boolean(bool),
    /// Integer value.
    Number(i64),
    /// Text value.
    String(String),
    /// No data for this player.
    Absent,
}

impl ProviderValue {
    /// Returns the boolean value, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true for [`ProviderValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

// ============================================================================
// SECTION: Decorations
// ============================================================================

/// Icon family understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconFamily {
    /// Filled icons.
    Solid,
    /// Outline icons.
    Regular,
    /// Brand logos.
    Brand,
}

/// Display color understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Red.
    Red,
    /// Deep orange.
    DeepOrange,
    /// Amber.
    Amber,
    /// No explicit color.
    None,
}

/// Icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Icon name within the family.
    pub name: String,
    /// Icon family.
    pub family: IconFamily,
    /// Icon color.
    pub color: Color,
}

impl Icon {
    /// Creates a solid icon.
    #[must_use]
    pub fn solid(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            family: IconFamily::Solid,
            color,
        }
    }

    /// Creates a regular (outline) icon.
    #[must_use]
    pub fn regular(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            family: IconFamily::Regular,
            color,
        }
    }
}

/// Number formatting hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    /// Epoch-millisecond date including the year.
    DateYear,
    /// Epoch-millisecond date and time.
    DateSecond,
    /// Millisecond duration.
    TimeMillis,
    /// Plain number.
    None,
}

/// Display metadata attached to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoration {
    /// Short label.
    pub text: String,
    /// Longer description.
    pub description: String,
    /// Icon shown next to the value.
    pub icon: Icon,
    /// Number format hint.
    pub format: FormatType,
    /// The string value is a player name the host may link.
    pub player_name: bool,
}

impl Decoration {
    /// Creates a decoration with a plain number format.
    #[must_use]
    pub fn new(text: impl Into<String>, description: impl Into<String>, icon: Icon) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
            icon,
            format: FormatType::None,
            player_name: false,
        }
    }

    /// Sets the number format hint.
    #[must_use]
    pub const fn with_format(mut self, format: FormatType) -> Self {
        self.format = format;
        self
    }

    /// Marks the string value as a player name.
    #[must_use]
    pub const fn as_player_name(mut self) -> Self {
        self.player_name = true;
        self
    }
}

// ============================================================================
// SECTION: Descriptor
// ============================================================================

/// Compute closure signature shared by all providers.
pub type ComputeFn = dyn Fn(&PlayerName) -> Result<ProviderValue, ProviderError> + Send + Sync;

/// Immutable provider record.
#[derive(Clone)]
pub struct ProviderDescriptor {
    /// Unique provider key.
    key: ProviderKey,
    /// Kind of value produced.
    value_kind: ValueKind,
    /// Display order; higher is more prominent.
    priority: i32,
    /// Condition produced by this provider (boolean providers only).
    produces: Option<ConditionName>,
    /// Condition gating this provider.
    requires: Option<ConditionName>,
    /// Whether the value is shown in the host's always-visible player table.
    show_in_player_table: bool,
    /// Display metadata.
    decoration: Decoration,
    /// Value computation.
    compute: Arc<ComputeFn>,
}

impl ProviderDescriptor {
    /// Creates a boolean provider.
    pub fn boolean<F>(
        key: impl Into<String>,
        priority: i32,
        decoration: Decoration,
        compute: F,
    ) -> Self
    where
        F: Fn(&PlayerName) -> Result<bool, ProviderError> + Send + Sync + 'static,
    {
        Self::with_compute(key, ValueKind::Boolean, priority, decoration, move |player| {
            compute(player).map(ProviderValue::Boolean)
        })
    }

    /// Creates a number provider; `None` means no data.
    pub fn number<F>(
        key: impl Into<String>,
        priority: i32,
        decoration: Decoration,
        compute: F,
    ) -> Self
    where
        F: Fn(&PlayerName) -> Result<Option<i64>, ProviderError> + Send + Sync + 'static,
    {
        Self::with_compute(key, ValueKind::Number, priority, decoration, move |player| {
            Ok(compute(player)?.map_or(ProviderValue::Absent, ProviderValue::Number))
        })
    }

    /// Creates a string provider; `None` means no data.
    pub fn string<F>(
        key: impl Into<String>,
        priority: i32,
        decoration: Decoration,
        compute: F,
    ) -> Self
    where
        F: Fn(&PlayerName) -> Result<Option<String>, ProviderError> + Send + Sync + 'static,
    {
        Self::with_compute(key, ValueKind::String, priority, decoration, move |player| {
            Ok(compute(player)?.map_or(ProviderValue::Absent, ProviderValue::String))
        })
    }

    /// Shared constructor for the typed builders.
    fn with_compute<F>(
        key: impl Into<String>,
        value_kind: ValueKind,
        priority: i32,
        decoration: Decoration,
        compute: F,
    ) -> Self
    where
        F: Fn(&PlayerName) -> Result<ProviderValue, ProviderError> + Send + Sync + 'static,
    {
        Self {
            key: ProviderKey::new(key),
            value_kind,
            priority,
            produces: None,
            requires: None,
            show_in_player_table: false,
            decoration,
            compute: Arc::new(compute),
        }
    }

    /// Declares the condition this provider produces.
    #[must_use]
    pub fn producing(mut self, condition: impl Into<String>) -> Self {
        self.produces = Some(ConditionName::new(condition));
        self
    }

    /// Gates this provider on a condition.
    #[must_use]
    pub fn gated_by(mut self, condition: impl Into<String>) -> Self {
        self.requires = Some(ConditionName::new(condition));
        self
    }

    /// Shows the value in the host's always-visible player table.
    #[must_use]
    pub const fn in_player_table(mut self) -> Self {
        self.show_in_player_table = true;
        self
    }

    /// Returns the provider key.
    #[must_use]
    pub const fn key(&self) -> &ProviderKey {
        &self.key
    }

    /// Returns the value kind.
    #[must_use]
    pub const fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// Returns the display priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the produced condition, if any.
    #[must_use]
    pub const fn produces(&self) -> Option<&ConditionName> {
        self.produces.as_ref()
    }

    /// Returns the gating condition, if any.
    #[must_use]
    pub const fn requires(&self) -> Option<&ConditionName> {
        self.requires.as_ref()
    }

    /// Returns true when the value belongs in the player table.
    #[must_use]
    pub const fn show_in_player_table(&self) -> bool {
        self.show_in_player_table
    }

    /// Returns the display decoration.
    #[must_use]
    pub const fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Computes the value for a player.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when the subsystem is not initialized.
    pub fn compute(&self, player: &PlayerName) -> Result<ProviderValue, ProviderError> {
        (self.compute)(player)
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("key", &self.key)
            .field("value_kind", &self.value_kind)
            .field("priority", &self.priority)
            .field("produces", &self.produces)
            .field("requires", &self.requires)
            .field("show_in_player_table", &self.show_in_player_table)
            .finish_non_exhaustive()
    }
}
