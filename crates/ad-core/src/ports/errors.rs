use thiserror::Error;

use crate::ids::SubjectId;

/// Failures reported by the session service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credential input: {0}")]
    InvalidInput(String),

    #[error("account already exists: {0}")]
    AccountExists(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session service unreachable")]
    Unreachable,

    #[error("session service rejected the request: {0}")]
    Rejected(String),
}

impl AuthError {
    /// Human-readable text supplied by the service, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidInput(message)
            | Self::AccountExists(message)
            | Self::Rejected(message) => Some(message.as_str()).filter(|m| !m.is_empty()),
            Self::InvalidCredentials | Self::Unreachable => None,
        }
    }
}

/// Failures reported by the profile document store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile not found: {0}")]
    NotFound(SubjectId),

    #[error("profile store unavailable")]
    Unavailable,

    #[error("profile store rejected the write: {0}")]
    Rejected(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ProfileError {
    /// Human-readable text supplied by the store, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) | Self::Storage(message) => {
                Some(message.as_str()).filter(|m| !m.is_empty())
            }
            Self::NotFound(_) | Self::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_message_only_for_textual_variants() {
        assert_eq!(
            AuthError::AccountExists("email in use".into()).message(),
            Some("email in use")
        );
        assert_eq!(AuthError::InvalidCredentials.message(), None);
        assert_eq!(AuthError::Rejected(String::new()).message(), None);
    }

    #[test]
    fn test_profile_message_only_for_textual_variants() {
        assert_eq!(
            ProfileError::Rejected("quota exceeded".into()).message(),
            Some("quota exceeded")
        );
        assert_eq!(ProfileError::NotFound(SubjectId::from("x")).message(), None);
        assert_eq!(ProfileError::Unavailable.message(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AuthError::AccountExists("email in use".into()).to_string(),
            "account already exists: email in use"
        );
        assert_eq!(
            ProfileError::NotFound(SubjectId::from("uid-1")).to_string(),
            "profile not found: uid-1"
        );
    }
}
