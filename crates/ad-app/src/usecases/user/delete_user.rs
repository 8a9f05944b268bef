use std::sync::Arc;

use ad_core::ports::{ProfileError, ProfileStorePort};
use ad_core::SubjectId;
use tracing::info;

/// Use case for removing a profile record.
///
/// Only the document is removed; the credential is untouched.
pub struct DeleteUser {
    profiles: Arc<dyn ProfileStorePort>,
}

impl DeleteUser {
    pub fn new(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self { profiles }
    }

    pub fn from_ports(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(profiles)
    }

    pub async fn execute(&self, uid: &SubjectId) -> Result<(), ProfileError> {
        self.profiles.delete_profile(uid).await?;
        info!(uid = %uid, "profile deleted");
        Ok(())
    }
}
