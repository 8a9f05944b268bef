//! Profile store port
//!
//! CRUD contract over the remote `users` document collection.

use async_trait::async_trait;

use crate::ids::SubjectId;
use crate::ports::errors::ProfileError;
use crate::user::UserProfile;

#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Write the record under its uid, replacing any existing document.
    async fn create_profile(&self, profile: &UserProfile) -> Result<(), ProfileError>;

    /// Overwrite fields of an existing document.
    ///
    /// Error semantics:
    /// - NotFound: no document exists for `profile.uid`
    async fn update_profile(&self, profile: &UserProfile) -> Result<(), ProfileError>;

    async fn delete_profile(&self, uid: &SubjectId) -> Result<(), ProfileError>;

    async fn get_profile(&self, uid: &SubjectId) -> Result<Option<UserProfile>, ProfileError>;
}
