use std::sync::Arc;

use ad_core::ports::{AuthError, SessionGatewayPort};
use ad_core::session::AuthenticatedUser;

/// Use case for signing in with a Google id token.
pub struct LoginWithGoogle {
    session: Arc<dyn SessionGatewayPort>,
}

impl LoginWithGoogle {
    pub fn new(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self { session }
    }

    pub fn from_ports(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self::new(session)
    }

    pub async fn execute(&self, id_token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.session.login_with_google(id_token).await
    }
}
