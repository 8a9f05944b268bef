use std::sync::Arc;

use ad_core::ports::{ProfileError, ProfileStorePort};
use ad_core::UserProfile;
use tracing::debug;

/// Use case for persisting a new profile record.
pub struct CreateUser {
    profiles: Arc<dyn ProfileStorePort>,
}

impl CreateUser {
    /// Create a new CreateUser use case from trait objects.
    pub fn new(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self { profiles }
    }

    /// Create a new CreateUser use case from cloned Arc<dyn Port> references.
    pub fn from_ports(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(profiles)
    }

    pub async fn execute(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        self.profiles.create_profile(profile).await?;
        debug!(uid = %profile.uid, "profile created");
        Ok(())
    }
}
