use serde::Serialize;

use crate::ports::errors::AuthError;
use crate::session::AuthenticatedUser;

pub const DEFAULT_LOGIN_FAILURE_MESSAGE: &str = "Error al iniciar sesión";

/// Progress of the current sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginState {
    #[default]
    Idle,
    InFlight,
    SignedIn {
        user: AuthenticatedUser,
        message: String,
    },
    Failed {
        message: String,
    },
}

impl LoginState {
    pub fn signed_in(user: AuthenticatedUser) -> Self {
        let who = user.email.clone().unwrap_or_else(|| user.uid.to_string());
        Self::SignedIn {
            user,
            message: format!("Bienvenido {who}"),
        }
    }

    pub fn failed(err: &AuthError) -> Self {
        Self::Failed {
            message: err
                .message()
                .unwrap_or(DEFAULT_LOGIN_FAILURE_MESSAGE)
                .to_string(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn message(&self) -> Option<(&str, bool)> {
        match self {
            Self::SignedIn { message, .. } => Some((message.as_str(), false)),
            Self::Failed { message } => Some((message.as_str(), true)),
            Self::Idle | Self::InFlight => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SubjectId;
    use crate::session::SignInProvider;

    #[test]
    fn test_signed_in_greets_by_email() {
        let state = LoginState::signed_in(AuthenticatedUser {
            uid: SubjectId::from("uid-1"),
            email: Some("a@b.com".to_string()),
            provider: SignInProvider::Password,
        });
        assert_eq!(state.message(), Some(("Bienvenido a@b.com", false)));
    }

    #[test]
    fn test_signed_in_falls_back_to_uid() {
        let state = LoginState::signed_in(AuthenticatedUser {
            uid: SubjectId::from("uid-1"),
            email: None,
            provider: SignInProvider::Facebook,
        });
        assert_eq!(state.message(), Some(("Bienvenido uid-1", false)));
    }

    #[test]
    fn test_failed_defaults() {
        assert_eq!(
            LoginState::failed(&AuthError::InvalidCredentials).message(),
            Some(("Error al iniciar sesión", true))
        );
    }
}
