// crates/punishment-bridge-config/src/config.rs
// ============================================================================
// Module: Punishment Bridge Configuration
// Description: Configuration loading and validation for the punishment bridge.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: punishment-bridge-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section and field has a default, so an empty file yields the stock
//! punishment extension bound to the stock host plugin.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use punishment_bridge_core::CapabilityId;
use punishment_bridge_core::FeatureId;
use punishment_bridge_core::Platform;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "punishment-bridge.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "PUNISHMENT_BRIDGE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a configured identifier in bytes.
pub(crate) const MAX_IDENTIFIER_LENGTH: usize = 256;
/// Default extension name.
pub(crate) const DEFAULT_EXTENSION_NAME: &str = "AdvancedBan";
/// Default marker type identifying the punishment subsystem.
pub(crate) const DEFAULT_SUBSYSTEM_MARKER: &str = "me.leoko.advancedban.Universal";
/// Default host capability required to show provider values.
pub(crate) const DEFAULT_REQUIRED_CAPABILITY: &str = "DATA_EXTENSION_SHOW_IN_PLAYER_TABLE";
/// Default host plugin owning platform listeners.
pub(crate) const DEFAULT_HOST_PLUGIN: &str = "Plan";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Punishment bridge configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BridgeConfig {
    /// Extension identity and availability gate.
    #[serde(default)]
    pub extension: ExtensionConfig,
    /// Event source platform toggles.
    #[serde(default)]
    pub platforms: PlatformsConfig,
    /// Audit log configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl BridgeConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extension.validate()?;
        self.platforms.validate()?;
        self.audit.validate()
    }
}

/// Extension identity and availability gate.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionConfig {
    /// Extension name shown by the host.
    #[serde(default = "default_extension_name")]
    pub name: String,
    /// Marker feature whose presence means the punishment subsystem is installed.
    #[serde(default = "default_subsystem_marker")]
    pub subsystem_marker: String,
    /// Host capability required before the extension is offered.
    #[serde(default = "default_required_capability")]
    pub required_capability: String,
    /// Host plugin that owns platform listeners.
    #[serde(default = "default_host_plugin")]
    pub host_plugin: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            name: default_extension_name(),
            subsystem_marker: default_subsystem_marker(),
            required_capability: default_required_capability(),
            host_plugin: default_host_plugin(),
        }
    }
}

impl ExtensionConfig {
    /// Returns the subsystem marker as a feature identifier.
    #[must_use]
    pub fn subsystem_marker(&self) -> FeatureId {
        FeatureId::new(self.subsystem_marker.as_str())
    }

    /// Returns the required host capability.
    #[must_use]
    pub fn required_capability(&self) -> CapabilityId {
        CapabilityId::new(self.required_capability.as_str())
    }

    /// Validates extension identifiers.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_identifier("extension.name", &self.name)?;
        validate_identifier("extension.subsystem_marker", &self.subsystem_marker)?;
        validate_identifier("extension.required_capability", &self.required_capability)?;
        validate_identifier("extension.host_plugin", &self.host_plugin)
    }
}

/// Per-platform settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformsConfig {
    /// Game server platform.
    #[serde(default)]
    pub bukkit: PlatformConfig,
    /// Proxy platform.
    #[serde(default)]
    pub bungee: PlatformConfig,
}

impl PlatformsConfig {
    /// Returns the settings for a platform.
    #[must_use]
    pub const fn get(&self, platform: Platform) -> &PlatformConfig {
        match platform {
            Platform::Bukkit => &self.bukkit,
            Platform::Bungee => &self.bungee,
        }
    }

    /// Validates platform markers.
    fn validate(&self) -> Result<(), ConfigError> {
        for platform in Platform::ALL {
            if let Some(marker) = &self.get(platform).marker {
                validate_identifier(&format!("platforms.{}.marker", platform.as_str()), marker)?;
            }
        }
        Ok(())
    }
}

/// Settings for one event source platform.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Whether the platform is probed at all.
    #[serde(default = "default_platform_enabled")]
    pub enabled: bool,
    /// Marker feature override; defaults to the platform's own marker.
    #[serde(default)]
    pub marker: Option<String>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            enabled: default_platform_enabled(),
            marker: None,
        }
    }
}

impl PlatformConfig {
    /// Returns the marker feature to probe for the platform.
    #[must_use]
    pub fn marker(&self, platform: Platform) -> FeatureId {
        self.marker.as_deref().map_or_else(|| platform.default_marker(), FeatureId::new)
    }
}

/// Audit log configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Enable structured audit logging.
    #[serde(default)]
    pub enabled: bool,
    /// Audit log path (JSON lines); required when enabled.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        if self.enabled && self.path.is_none() {
            return Err(ConfigError::Invalid("audit.enabled requires audit.path".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    resolve_path_from(path, env::var(CONFIG_ENV_VAR).ok())
}

/// Resolves the config path given an already-read environment override.
fn resolve_path_from(
    path: Option<&Path>,
    env_path: Option<String>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Some(env_path) = env_path {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a marker, capability, or plugin identifier.
fn validate_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    if value.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
        return Err(ConfigError::Invalid(format!(
            "{field} must not contain whitespace or control characters"
        )));
    }
    Ok(())
}

/// Default extension name.
fn default_extension_name() -> String {
    DEFAULT_EXTENSION_NAME.to_string()
}

/// Default subsystem marker.
fn default_subsystem_marker() -> String {
    DEFAULT_SUBSYSTEM_MARKER.to_string()
}

/// Default required capability.
fn default_required_capability() -> String {
    DEFAULT_REQUIRED_CAPABILITY.to_string()
}

/// Default host plugin name.
fn default_host_plugin() -> String {
    DEFAULT_HOST_PLUGIN.to_string()
}

/// Platforms are probed unless disabled.
const fn default_platform_enabled() -> bool {
    true
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn explicit_path_wins_over_environment() {
        let resolved =
            resolve_path_from(Some(Path::new("explicit.toml")), Some("env.toml".to_string()))
                .unwrap();
        assert_eq!(resolved, PathBuf::from("explicit.toml"));
    }

    #[test]
    fn environment_path_used_when_no_explicit_path() {
        let resolved = resolve_path_from(None, Some("env.toml".to_string())).unwrap();
        assert_eq!(resolved, PathBuf::from("env.toml"));
    }

    #[test]
    fn default_name_used_without_overrides() {
        assert_eq!(resolve_path_from(None, None).unwrap(), PathBuf::from(DEFAULT_CONFIG_NAME));
    }

    #[test]
    fn overlong_environment_path_is_rejected() {
        let err = resolve_path_from(None, Some("a".repeat(MAX_TOTAL_PATH_LENGTH + 1)));
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn identifier_rules() {
        assert!(validate_identifier("field", "Plan").is_ok());
        assert!(validate_identifier("field", "").is_err());
        assert!(validate_identifier("field", "two words").is_err());
        assert!(validate_identifier("field", "tab\there").is_err());
        assert!(validate_identifier("field", &"x".repeat(MAX_IDENTIFIER_LENGTH)).is_ok());
        assert!(validate_identifier("field", &"x".repeat(MAX_IDENTIFIER_LENGTH + 1)).is_err());
    }
}
