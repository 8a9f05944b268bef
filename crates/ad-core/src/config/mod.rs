//! # Pure Data Module - Data Transfer Objects Only
//!
//! Defines the configuration data structures and the TOML → DTO mapping.
//! No validation and no default-value policy live here: empty values are
//! facts, and the composition root decides what to do with them.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Display name used in log lines (may be empty)
    pub app_name: String,

    /// Profile store backend name, e.g. "memory" or "file" (unchecked)
    pub profile_backend: String,

    /// Directory for file-backed profile documents (no existence check)
    pub data_dir: PathBuf,

    /// Directory for the rolling log file (no existence check)
    pub log_dir: PathBuf,

    /// Whether to write logs to a file in addition to stdout
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let text = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            app_name: text("general", "app_name"),
            profile_backend: text("storage", "profile_backend"),
            data_dir: PathBuf::from(text("storage", "data_dir")),
            log_dir: PathBuf::from(text("logging", "log_dir")),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            app_name: String::new(),
            profile_backend: String::new(),
            data_dir: PathBuf::new(),
            log_dir: PathBuf::new(),
            file_logging: false,
        }
    }
}
