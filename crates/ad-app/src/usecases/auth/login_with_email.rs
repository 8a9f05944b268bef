use std::sync::Arc;

use ad_core::ports::{AuthError, SessionGatewayPort};
use ad_core::session::AuthenticatedUser;

/// Use case for signing in with email and password.
pub struct LoginWithEmail {
    session: Arc<dyn SessionGatewayPort>,
}

impl LoginWithEmail {
    pub fn new(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self { session }
    }

    pub fn from_ports(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self::new(session)
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        self.session.login_with_email(email, password).await
    }
}
