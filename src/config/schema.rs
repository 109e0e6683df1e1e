//! Configuration schema
//!
//! Configuration is loaded from TOML (see [`loader`](super::loader)),
//! with `SCRUB_*` environment variable overrides applied on top.

use crate::domain::Locale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Policy applied when no strategy is registered for an entity type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Leave the span unredacted: the replacement is the original
    /// substring, so the text passes through unchanged
    #[default]
    PassThrough,
    /// Redact to nothing: the replacement is empty and the forward pass
    /// deletes the span (legacy behavior)
    Delete,
    /// Fail hard with a validation error naming the tag
    Reject,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScrubConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.engine
            .validate()
            .context("Invalid engine configuration")?;
        self.logging
            .validate()
            .context("Invalid logging configuration")?;
        Ok(())
    }

    /// Apply environment variable overrides (SCRUB_* prefix)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.engine.apply_env_overrides()?;
        self.logging.apply_env_overrides()?;
        Ok(())
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Locale governing placeholder selection and detection requests
    #[serde(default)]
    pub locale: Locale,

    /// Default name of the record field holding the text to process
    #[serde(default = "default_text_field")]
    pub text_field: String,

    /// Policy for entity type tags with no registered strategy
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Verify stored length/checksum metadata before reverting
    #[serde(default = "default_verify_on_revert")]
    pub verify_on_revert: bool,
}

fn default_text_field() -> String {
    "text".to_string()
}

fn default_verify_on_revert() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            text_field: default_text_field(),
            fallback: FallbackPolicy::default(),
            verify_on_revert: default_verify_on_revert(),
        }
    }
}

impl EngineConfig {
    /// Validate the engine configuration
    pub fn validate(&self) -> Result<()> {
        if self.text_field.trim().is_empty() {
            anyhow::bail!("text_field cannot be empty");
        }
        if !self
            .text_field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            anyhow::bail!(
                "text_field '{}' contains characters outside [A-Za-z0-9_]",
                self.text_field
            );
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SCRUB_LOCALE") {
            self.locale = Locale::from_str(&val)
                .map_err(|e| anyhow::anyhow!("Invalid SCRUB_LOCALE: {e}"))?;
        }

        if let Ok(val) = std::env::var("SCRUB_TEXT_FIELD") {
            self.text_field = val;
        }

        if let Ok(val) = std::env::var("SCRUB_FALLBACK") {
            self.fallback = match val.to_lowercase().as_str() {
                "pass_through" => FallbackPolicy::PassThrough,
                "delete" => FallbackPolicy::Delete,
                "reject" => FallbackPolicy::Reject,
                _ => anyhow::bail!("Invalid SCRUB_FALLBACK: {}", val),
            };
        }

        if let Ok(val) = std::env::var("SCRUB_VERIFY_ON_REVERT") {
            self.verify_on_revert = val.parse().context("Invalid SCRUB_VERIFY_ON_REVERT value")?;
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON file logging
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// File rotation policy (daily or hourly)
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_path: default_log_path(),
            file_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate the logging configuration
    pub fn validate(&self) -> Result<()> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => anyhow::bail!("Invalid log level: {}", other),
        }
        match self.file_rotation.as_str() {
            "daily" | "hourly" => {}
            other => anyhow::bail!("Invalid log rotation: {}", other),
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SCRUB_LOG_LEVEL") {
            self.level = val;
        }
        if let Ok(val) = std::env::var("SCRUB_LOG_FILE_ENABLED") {
            self.file_enabled = val.parse().context("Invalid SCRUB_LOG_FILE_ENABLED value")?;
        }
        if let Ok(val) = std::env::var("SCRUB_LOG_FILE_PATH") {
            self.file_path = val;
        }
        if let Ok(val) = std::env::var("SCRUB_LOG_ROTATION") {
            self.file_rotation = val;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrubConfig::default();
        assert_eq!(config.engine.locale, Locale::En);
        assert_eq!(config.engine.text_field, "text");
        assert_eq!(config.engine.fallback, FallbackPolicy::PassThrough);
        assert!(config.engine.verify_on_revert);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn test_default_config_validates() {
        let config = ScrubConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_text_field_rejected() {
        let mut config = ScrubConfig::default();
        config.engine.text_field = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_text_field_with_punctuation_rejected() {
        let mut config = ScrubConfig::default();
        config.engine.text_field = "user.text".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = ScrubConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fallback_policy_serde() {
        let json = serde_json::to_string(&FallbackPolicy::PassThrough).unwrap();
        assert_eq!(json, "\"pass_through\"");
        let back: FallbackPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(back, FallbackPolicy::Reject);
    }
}
