//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto the [`AppConfig`] DTO.
//!
//! > **Pure data loading only. Accept whatever is in the file.**

use anyhow::Context;
use std::path::Path;
use tracing::info;

use gym_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// **NO validation is performed**: empty strings and zero delays are valid.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields [`AppConfig::empty`].
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "no config file, using defaults");
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}
