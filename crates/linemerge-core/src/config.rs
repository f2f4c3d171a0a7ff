// Rust guideline compliant 2026-10-14

//! Configuration management for linemerge.

use crate::{Error, LineOrder, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for merge behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MergeConfig {
    /// Order used to sort merged lines.
    #[serde(default)]
    pub order: LineOrder,

    /// Maximum number of source reads outstanding at once.
    ///
    /// Unset means `default_max_concurrency`, a multiple of the CPU count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<usize>,
}

impl MergeConfig {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, if given and present
    /// 3. Environment variables with `LINEMERGE_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path.filter(|p| p.exists()) {
            let content = std::fs::read_to_string(path).map_err(|e| {
                Error::InvalidConfig(format!("Cannot read {}: {}", path.display(), e))
            })?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LINEMERGE_ORDER` - Line order (lexical/case_insensitive/reverse)
    /// - `LINEMERGE_MAX_CONCURRENCY` - Maximum outstanding reads (positive number)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("LINEMERGE_ORDER") {
            self.order = val.parse()?;
        }

        if let Ok(val) = std::env::var("LINEMERGE_MAX_CONCURRENCY") {
            let limit = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "LINEMERGE_MAX_CONCURRENCY must be a positive number".to_string(),
                )
            })?;
            self.max_concurrency = Some(limit);
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_concurrency` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrency == Some(0) {
            return Err(Error::InvalidConfig(
                "max_concurrency must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::InvalidConfig(format!("Cannot write {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
