use std::sync::Arc;

use ad_core::ports::{AuthError, SessionGatewayPort};
use ad_core::SubjectId;
use tracing::{debug, info_span, Instrument};

/// Use case for creating an email/password credential.
///
/// Returns the subject id issued by the session service. The call is made
/// exactly once; failures are handed back untouched.
pub struct RegisterWithEmail {
    session: Arc<dyn SessionGatewayPort>,
}

impl RegisterWithEmail {
    /// Create a new RegisterWithEmail use case from trait objects.
    pub fn new(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self { session }
    }

    /// Create a new RegisterWithEmail use case from cloned Arc<dyn Port> references.
    ///
    /// This is a convenience method for the UseCases accessor pattern.
    pub fn from_ports(session: Arc<dyn SessionGatewayPort>) -> Self {
        Self::new(session)
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<SubjectId, AuthError> {
        let span = info_span!("usecase.register_with_email.execute", email = %email);
        async {
            let subject_id = self.session.create_credential(email, password).await?;
            debug!(subject_id = %subject_id, "credential created");
            Ok(subject_id)
        }
        .instrument(span)
        .await
    }
}
