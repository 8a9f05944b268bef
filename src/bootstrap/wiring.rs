//! # Dependency Injection
//!
//! Builds the concrete adapters named by the config and hands them out as
//! port trait objects. Assembly only: no business decisions live here.

use std::path::PathBuf;
use std::sync::Arc;

use ad_app::{LoginOrchestrator, RegistrationOrchestrator};
use ad_core::ports::{ClockPort, ProfileStorePort, SessionGatewayPort, ViewStatePort};
use ad_core::{AppConfig, LoginUiState, RegistrationUiState};
use ad_infra::{FileProfileStore, InMemoryProfileStore, InMemorySessionGateway, SystemClock};
use tracing::{info, warn};

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Profile store initialization failed: {0}")]
    ProfileStoreInit(String),
}

/// Which profile store the config asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBackend {
    Memory,
    File(PathBuf),
}

/// Ports shared by every orchestrator built for this process.
#[derive(Clone)]
pub struct AppDeps {
    pub session: Arc<dyn SessionGatewayPort>,
    pub profiles: Arc<dyn ProfileStorePort>,
    pub clock: Arc<dyn ClockPort>,
}

impl AppDeps {
    pub fn registration_orchestrator(
        &self,
        view_state: Arc<dyn ViewStatePort<RegistrationUiState>>,
    ) -> RegistrationOrchestrator {
        RegistrationOrchestrator::from_ports(
            self.session.clone(),
            self.profiles.clone(),
            self.clock.clone(),
            view_state,
        )
    }

    pub fn login_orchestrator(
        &self,
        view_state: Arc<dyn ViewStatePort<LoginUiState>>,
    ) -> LoginOrchestrator {
        LoginOrchestrator::from_ports(self.session.clone(), view_state)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("appdelivery")
}

/// Map the raw backend name onto a store choice.
///
/// Empty means memory. Unknown names fall back to memory with a warning.
pub fn select_profile_backend(config: &AppConfig) -> ProfileBackend {
    match config.profile_backend.trim() {
        "" | "memory" => ProfileBackend::Memory,
        "file" => {
            let data_dir = if config.data_dir.as_os_str().is_empty() {
                default_data_dir()
            } else {
                config.data_dir.clone()
            };
            ProfileBackend::File(data_dir)
        }
        other => {
            warn!(backend = other, "unknown profile backend, using memory");
            ProfileBackend::Memory
        }
    }
}

pub fn wire_dependencies(config: &AppConfig) -> Result<AppDeps, WiringError> {
    let profiles: Arc<dyn ProfileStorePort> = match select_profile_backend(config) {
        ProfileBackend::Memory => Arc::new(InMemoryProfileStore::new()),
        ProfileBackend::File(data_dir) => {
            std::fs::create_dir_all(&data_dir).map_err(|e| {
                WiringError::ProfileStoreInit(format!("{}: {e}", data_dir.display()))
            })?;
            info!(data_dir = %data_dir.display(), "using file profile store");
            Arc::new(FileProfileStore::with_base_dir(data_dir))
        }
    };

    Ok(AppDeps {
        session: Arc::new(InMemorySessionGateway::new()),
        profiles,
        clock: Arc::new(SystemClock),
    })
}
