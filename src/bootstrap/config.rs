//! Config file discovery.
//!
//! Decides which file to read; parsing lives in `ad_infra::load_config`.

use std::path::PathBuf;

use ad_core::AppConfig;
use anyhow::Context;

pub const CONFIG_ENV_VAR: &str = "APPDELIVERY_CONFIG";

/// Pick the config path: explicit env value first, then the platform config dir.
fn config_path_from(env_value: Option<String>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    match env_value {
        Some(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
        _ => config_dir.map(|dir| dir.join("appdelivery").join("config.toml")),
    }
}

pub fn resolve_config_path() -> Option<PathBuf> {
    config_path_from(std::env::var(CONFIG_ENV_VAR).ok(), dirs::config_dir())
}

/// Read the config file at `path`; a missing file yields empty values.
fn load_from(path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) if path.exists() => ad_infra::load_config(path.clone())
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => Ok(AppConfig::empty()),
    }
}

/// Load `.env` (if present), resolve the config path and read it.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();
    load_from(resolve_config_path())
}
