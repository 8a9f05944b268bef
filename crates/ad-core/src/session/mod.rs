//! Authenticated session models.

use serde::{Deserialize, Serialize};

use crate::ids::SubjectId;

/// How the current session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInProvider {
    Password,
    Google,
    Facebook,
}

/// A user signed in through the session service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub uid: SubjectId,
    pub email: Option<String>,
    pub provider: SignInProvider,
}
