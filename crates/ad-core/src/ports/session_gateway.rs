//! Session gateway port
//!
//! Capability contract of the remote authentication service. The transport
//! (REST, SDK, in-memory) lives in the infrastructure layer.

use async_trait::async_trait;

use crate::ids::SubjectId;
use crate::ports::errors::AuthError;
use crate::session::AuthenticatedUser;

#[async_trait]
pub trait SessionGatewayPort: Send + Sync {
    /// Create an email/password credential and return its subject id.
    ///
    /// Single-shot: implementations must not retry internally.
    async fn create_credential(&self, email: &str, password: &str)
        -> Result<SubjectId, AuthError>;

    async fn login_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError>;

    async fn login_with_google(&self, id_token: &str) -> Result<AuthenticatedUser, AuthError>;

    async fn login_with_facebook(&self, access_token: &str)
        -> Result<AuthenticatedUser, AuthError>;

    /// Currently signed-in user, if any.
    fn current_user(&self) -> Option<AuthenticatedUser>;

    fn log_out(&self);
}
