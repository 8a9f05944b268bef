use std::sync::Arc;

use ad_core::ports::{ProfileError, ProfileStorePort};
use ad_core::UserProfile;

/// Use case for overwriting an existing profile record.
pub struct UpdateUser {
    profiles: Arc<dyn ProfileStorePort>,
}

impl UpdateUser {
    pub fn new(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self { profiles }
    }

    pub fn from_ports(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(profiles)
    }

    pub async fn execute(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        self.profiles.update_profile(profile).await
    }
}
