//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Pure data loading:
//! no validation and no default values. Empty strings and unknown backend
//! names are accepted as they are; the composition root decides what they mean.

use anyhow::Context;
use std::path::PathBuf;

use ad_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
