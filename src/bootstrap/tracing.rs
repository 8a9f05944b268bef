//! Tracing configuration for AppDelivery
//!
//! Installs the global `tracing-subscriber` registry: an env-filter, a
//! human-readable fmt layer on stderr (stdout carries the CLI's JSON output),
//! and an optional non-blocking file layer.

use std::{fs, io, path::PathBuf, sync::OnceLock};

use ad_core::AppConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

pub const LOG_FILE_NAME: &str = "appdelivery.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for everything
/// - **Production**: info level, with the app and infra crates pinned explicitly
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("ad_app={level}"),
        format!("ad_infra={level}"),
        format!("appdelivery_lib={level}"),
    ]
}

/// Directory for the log file; empty config falls back to the platform data dir.
fn resolve_log_dir(config: &AppConfig) -> PathBuf {
    if !config.log_dir.as_os_str().is_empty() {
        return config.log_dir.clone();
    }
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("appdelivery")
        .join("logs")
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` overrides the default directives. Call once, before any
/// orchestrator is constructed.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer = BoxMakeWriter::new(io::stderr);
    let file_writer = if config.file_logging {
        match build_file_writer(resolve_log_dir(config)) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        }
    } else {
        None
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: PathBuf) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert_eq!(dev_directives[0], "debug");
        assert!(dev_directives.contains(&"ad_app=debug".to_string()));
        assert!(dev_directives.contains(&"ad_infra=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert_eq!(prod_directives[0], "info");
        assert!(prod_directives.contains(&"ad_app=info".to_string()));
        assert!(prod_directives.contains(&"ad_infra=info".to_string()));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        let joined = build_filter_directives(false).join(",");
        assert!(tracing_subscriber::EnvFilter::try_new(joined).is_ok());
    }

    #[test]
    fn test_configured_log_dir_wins() {
        let mut config = AppConfig::empty();
        config.log_dir = PathBuf::from("/var/log/appdelivery");
        assert_eq!(resolve_log_dir(&config), PathBuf::from("/var/log/appdelivery"));
    }

    #[test]
    fn test_empty_log_dir_falls_back() {
        let dir = resolve_log_dir(&AppConfig::empty());
        assert!(dir.ends_with("appdelivery/logs"));
    }
}
