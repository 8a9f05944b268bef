use std::sync::Arc;

use ad_core::ports::SessionGatewayPort;
use tracing::info;

/// Use case for ending the current session.
pub struct LogOut {
    session: Arc<dyn SessionGatewayPort>,
}

impl LogOut {
    pub fn new(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self { session }
    }

    pub fn from_ports(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self::new(session)
    }

    pub fn execute(&self) {
        self.session.log_out();
        info!("session closed");
    }
}
