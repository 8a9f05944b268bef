use std::sync::Arc;

use ad_core::ports::{ProfileError, ProfileStorePort};
use ad_core::{SubjectId, UserProfile};

/// Use case for loading a profile by uid.
pub struct GetUser {
    profiles: Arc<dyn ProfileStorePort>,
}

impl GetUser {
    pub fn new(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self { profiles }
    }

    pub fn from_ports(profiles: Arc<dyn ProfileStorePort>) -> Self {
        Self::new(profiles)
    }

    /// `Ok(None)` when no document exists for `uid`.
    pub async fn execute(&self, uid: &SubjectId) -> Result<Option<UserProfile>, ProfileError> {
        self.profiles.get_profile(uid).await
    }
}
