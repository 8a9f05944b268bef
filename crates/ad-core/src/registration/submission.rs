//! Registration submission state machine.
//!
//! Pure transition helpers: the orchestrator decides *when* to move between
//! states, this module decides *what* each terminal state carries.

use serde::Serialize;

use crate::ids::SubjectId;
use crate::ports::errors::{AuthError, ProfileError};

pub const WELCOME_PREFIX: &str = "Bienvenido";
pub const DEFAULT_AUTH_FAILURE_MESSAGE: &str = "Error en el registro";
pub const DEFAULT_PROFILE_FAILURE_MESSAGE: &str = "Error al guardar usuario";

/// Which remote step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Credential creation was rejected; no profile was written.
    Auth,
    /// The credential exists but its profile record could not be persisted.
    Profile,
}

/// Progress of the current sign-up attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded {
        profile_id: SubjectId,
        message: String,
    },
    Failed {
        kind: FailureKind,
        message: String,
    },
}

impl SubmissionState {
    pub fn succeeded(profile_id: SubjectId, name: &str) -> Self {
        Self::Succeeded {
            profile_id,
            message: format!("{WELCOME_PREFIX} {name}"),
        }
    }

    /// Terminal state for a rejected credential, falling back to the default copy.
    pub fn auth_failed(err: &AuthError) -> Self {
        Self::Failed {
            kind: FailureKind::Auth,
            message: err
                .message()
                .unwrap_or(DEFAULT_AUTH_FAILURE_MESSAGE)
                .to_string(),
        }
    }

    /// Terminal state for a profile write that failed after the credential was created.
    pub fn profile_failed(err: &ProfileError) -> Self {
        Self::Failed {
            kind: FailureKind::Profile,
            message: err
                .message()
                .unwrap_or(DEFAULT_PROFILE_FAILURE_MESSAGE)
                .to_string(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// User-facing message of a terminal state, with its error flag.
    pub fn message(&self) -> Option<(&str, bool)> {
        match self {
            Self::Succeeded { message, .. } => Some((message.as_str(), false)),
            Self::Failed { message, .. } => Some((message.as_str(), true)),
            Self::Idle | Self::InFlight => None,
        }
    }
}
