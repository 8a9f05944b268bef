use std::sync::Arc;

use ad_core::ports::{AuthError, SessionGatewayPort};
use ad_core::session::AuthenticatedUser;

/// Use case for signing in with a Facebook access token.
pub struct LoginWithFacebook {
    session: Arc<dyn SessionGatewayPort>,
}

impl LoginWithFacebook {
    pub fn new(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self { session }
    }

    pub fn from_ports(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self::new(session)
    }

    pub async fn execute(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.session.login_with_facebook(access_token).await
    }
}
