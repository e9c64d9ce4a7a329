// crates/punishment-bridge-providers/src/graph.rs
// ============================================================================
// Module: Provider Graph
// Description: Validated, priority-ordered set of condition-linked providers.
// Purpose: Register lazily evaluated per-player facts with the analytics host.
// Dependencies: punishment-bridge-core, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`ProviderGraph`] is built once from descriptors and never changes.
//! Conditions are plain names linking one producing boolean provider to any
//! number of dependents; the builder rejects graphs where that link is
//! ambiguous, dangling, or circular.
//! Invariants:
//! - Provider keys are unique.
//! - Every required condition is produced by exactly one boolean provider.
//! - Condition chains are acyclic.
//! - Providers are stored in descending priority order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use punishment_bridge_core::ConditionName;
use punishment_bridge_core::PlayerName;
use punishment_bridge_core::ProviderKey;
use serde::Serialize;
use thiserror::Error;

use crate::descriptor::Decoration;
use crate::descriptor::Icon;
use crate::descriptor::ProviderDescriptor;
use crate::descriptor::ProviderError;
use crate::descriptor::ProviderValue;
use crate::descriptor::ValueKind;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Provider graph construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two providers share a key.
    #[error("provider already registered: {0}")]
    DuplicateProvider(ProviderKey),
    /// A provider requires a condition nobody produces.
    #[error("provider {provider} requires unknown condition {condition}")]
    UnknownCondition {
        /// Gated provider.
        provider: ProviderKey,
        /// Missing condition.
        condition: ConditionName,
    },
    /// A condition is produced by more than one provider.
    #[error("condition produced more than once: {0}")]
    DuplicateConditionProducer(ConditionName),
    /// A non-boolean provider declares a produced condition.
    #[error("only boolean providers may produce conditions: {0}")]
    ConditionProducerNotBoolean(ProviderKey),
    /// A provider is gated by the condition it produces.
    #[error("provider gated by its own condition: {0}")]
    SelfGated(ProviderKey),
    /// Condition links form a cycle.
    #[error("condition cycle through provider {0}")]
    ConditionCycle(ProviderKey),
}

/// Host registration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The host refused the extension.
    #[error("host rejected extension: {0}")]
    Rejected(String),
}

// ============================================================================
// SECTION: Extension Metadata
// ============================================================================

/// Extension-level display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    /// Extension name shown by the host.
    pub name: String,
    /// Extension icon.
    pub icon: Icon,
}

/// Host lifecycle events that should trigger re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallEvent {
    /// A player joined.
    PlayerJoin,
    /// A player left.
    PlayerLeave,
}

/// Closure-free provider description handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderDeclaration {
    /// Provider key.
    pub key: ProviderKey,
    /// Value kind.
    pub value_kind: ValueKind,
    /// Display priority.
    pub priority: i32,
    /// Condition produced by the provider.
    pub condition_name: Option<ConditionName>,
    /// Condition gating the provider.
    pub conditional: Option<ConditionName>,
    /// Whether the value belongs in the player table.
    pub show_in_player_table: bool,
    /// Display metadata.
    pub decoration: Decoration,
}

/// Serializable description of a whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionDeclaration {
    /// Extension metadata.
    pub plugin: PluginInfo,
    /// Lifecycle events requesting re-evaluation.
    pub call_events: Vec<CallEvent>,
    /// Providers in descending priority order.
    pub providers: Vec<ProviderDeclaration>,
}

/// Host-side registration contract.
pub trait ExtensionRegistrar {
    /// Registers a graph with the host.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the host refuses the extension.
    fn register_extension(&self, graph: Arc<ProviderGraph>) -> Result<(), RegistrationError>;
}

// ============================================================================
// SECTION: Evaluation Results
// ============================================================================

/// One visible provider value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluatedValue {
    /// Provider key.
    pub key: ProviderKey,
    /// Computed value.
    pub value: ProviderValue,
}

/// Visible values for one player in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerEvaluation {
    /// Evaluated player.
    pub player: PlayerName,
    /// Values of providers whose conditions held.
    pub values: Vec<EvaluatedValue>,
}

impl PlayerEvaluation {
    /// Returns the value for a key, if the provider was visible.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ProviderValue> {
        self.values.iter().find(|entry| entry.key.as_str() == key).map(|entry| &entry.value)
    }

    /// Returns true when the provider was visible.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder collecting descriptors before validation.
#[derive(Debug)]
pub struct ProviderGraphBuilder {
    /// Extension metadata.
    plugin: PluginInfo,
    /// Lifecycle events.
    call_events: Vec<CallEvent>,
    /// Descriptors in insertion order.
    providers: Vec<ProviderDescriptor>,
}

impl ProviderGraphBuilder {
    /// Subscribes the graph to a host lifecycle event.
    #[must_use]
    pub fn call_on(mut self, event: CallEvent) -> Self {
        if !self.call_events.contains(&event) {
            self.call_events.push(event);
        }
        self
    }

    /// Adds a provider.
    #[must_use]
    pub fn provider(mut self, descriptor: ProviderDescriptor) -> Self {
        self.providers.push(descriptor);
        self
    }

    /// Validates condition links and builds the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] when keys collide or condition links are invalid.
    pub fn build(mut self) -> Result<ProviderGraph, GraphError> {
        self.providers.sort_by(|left, right| right.priority().cmp(&left.priority()));

        let mut index = BTreeMap::new();
        let mut producers = BTreeMap::new();
        for (position, provider) in self.providers.iter().enumerate() {
            if index.insert(provider.key().clone(), position).is_some() {
                return Err(GraphError::DuplicateProvider(provider.key().clone()));
            }
            if let Some(condition) = provider.produces() {
                if provider.value_kind() != ValueKind::Boolean {
                    return Err(GraphError::ConditionProducerNotBoolean(provider.key().clone()));
                }
                if producers.insert(condition.clone(), position).is_some() {
                    return Err(GraphError::DuplicateConditionProducer(condition.clone()));
                }
            }
        }

        for provider in &self.providers {
            let Some(condition) = provider.requires() else {
                continue;
            };
            if provider.produces() == Some(condition) {
                return Err(GraphError::SelfGated(provider.key().clone()));
            }
            if !producers.contains_key(condition) {
                return Err(GraphError::UnknownCondition {
                    provider: provider.key().clone(),
                    condition: condition.clone(),
                });
            }
        }

        for provider in &self.providers {
            let mut current = provider;
            let mut steps = 0;
            while let Some(condition) = current.requires() {
                steps += 1;
                if steps > self.providers.len() {
                    return Err(GraphError::ConditionCycle(provider.key().clone()));
                }
                let Some(&producer) = producers.get(condition) else {
                    break;
                };
                current = &self.providers[producer];
            }
        }

        Ok(ProviderGraph {
            plugin: self.plugin,
            call_events: self.call_events,
            providers: self.providers,
            index,
            producers,
        })
    }
}

// ============================================================================
// SECTION: Graph
// ============================================================================

/// Immutable, validated provider graph.
#[derive(Debug)]
pub struct ProviderGraph {
    /// Extension metadata.
    plugin: PluginInfo,
    /// Lifecycle events requesting re-evaluation.
    call_events: Vec<CallEvent>,
    /// Providers in descending priority order.
    providers: Vec<ProviderDescriptor>,
    /// Provider position by key.
    index: BTreeMap<ProviderKey, usize>,
    /// Producing provider position by condition.
    producers: BTreeMap<ConditionName, usize>,
}

impl ProviderGraph {
    /// Starts a graph for the given extension.
    #[must_use]
    pub const fn builder(plugin: PluginInfo) -> ProviderGraphBuilder {
        ProviderGraphBuilder {
            plugin,
            call_events: Vec::new(),
            providers: Vec::new(),
        }
    }

    /// Returns the extension metadata.
    #[must_use]
    pub const fn plugin(&self) -> &PluginInfo {
        &self.plugin
    }

    /// Returns the lifecycle events requesting re-evaluation.
    #[must_use]
    pub fn call_events(&self) -> &[CallEvent] {
        &self.call_events
    }

    /// Returns providers in descending priority order.
    #[must_use]
    pub fn providers(&self) -> &[ProviderDescriptor] {
        &self.providers
    }

    /// Returns the number of providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true when the graph has no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Looks up a provider by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ProviderDescriptor> {
        self.index.get(&ProviderKey::new(key)).map(|&position| &self.providers[position])
    }

    /// Returns the provider producing a condition.
    #[must_use]
    pub fn producer_of(&self, condition: &ConditionName) -> Option<&ProviderDescriptor> {
        self.producers.get(condition).map(|&position| &self.providers[position])
    }

    /// Returns providers shown in the host's always-visible player table.
    pub fn table_columns(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.providers.iter().filter(|provider| provider.show_in_player_table())
    }

    /// Returns the closure-free declaration for host registration.
    #[must_use]
    pub fn declaration(&self) -> ExtensionDeclaration {
        ExtensionDeclaration {
            plugin: self.plugin.clone(),
            call_events: self.call_events.clone(),
            providers: self
                .providers
                .iter()
                .map(|provider| ProviderDeclaration {
                    key: provider.key().clone(),
                    value_kind: provider.value_kind(),
                    priority: provider.priority(),
                    condition_name: provider.produces().cloned(),
                    conditional: provider.requires().cloned(),
                    show_in_player_table: provider.show_in_player_table(),
                    decoration: provider.decoration().clone(),
                })
                .collect(),
        }
    }

    /// Evaluates every visible provider for a player, as the host would render them.
    ///
    /// A provider is visible when its condition chain holds; hidden providers
    /// are never computed.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotReady`] when any visible provider reports it.
    pub fn evaluate_player(&self, player: &PlayerName) -> Result<PlayerEvaluation, ProviderError> {
        let mut computed: BTreeMap<usize, ProviderValue> = BTreeMap::new();
        let mut values = Vec::new();
        for position in 0..self.providers.len() {
            if !self.is_visible(position, player, &mut computed)? {
                continue;
            }
            let value = self.value_at(position, player, &mut computed)?;
            values.push(EvaluatedValue {
                key: self.providers[position].key().clone(),
                value,
            });
        }
        Ok(PlayerEvaluation {
            player: player.clone(),
            values,
        })
    }

    /// Returns true when the provider's condition chain holds for the player.
    fn is_visible(
        &self,
        position: usize,
        player: &PlayerName,
        computed: &mut BTreeMap<usize, ProviderValue>,
    ) -> Result<bool, ProviderError> {
        let Some(condition) = self.providers[position].requires() else {
            return Ok(true);
        };
        let Some(&producer) = self.producers.get(condition) else {
            return Ok(false);
        };
        if !self.is_visible(producer, player, computed)? {
            return Ok(false);
        }
        Ok(self.value_at(producer, player, computed)?.as_bool().unwrap_or(false))
    }

    /// Computes a provider value once per evaluation.
    fn value_at(
        &self,
        position: usize,
        player: &PlayerName,
        computed: &mut BTreeMap<usize, ProviderValue>,
    ) -> Result<ProviderValue, ProviderError> {
        if let Some(value) = computed.get(&position) {
            return Ok(value.clone());
        }
        let value = self.providers[position].compute(player)?;
        computed.insert(position, value.clone());
        Ok(value)
    }
}
