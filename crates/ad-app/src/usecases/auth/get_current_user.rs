use std::sync::Arc;

use ad_core::ports::SessionGatewayPort;
use ad_core::session::AuthenticatedUser;

/// Use case for reading the signed-in user.
pub struct GetCurrentUser {
    session: Arc<dyn SessionGatewayPort>,
}

impl GetCurrentUser {
    pub fn new(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self { session }
    }

    pub fn from_ports(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self::new(session)
    }

    pub fn execute(&self) -> Option<AuthenticatedUser> {
        self.session.current_user()
    }
}
