//! In-process `users` collection.
//!
//! Stores the same JSON document shape the hosted store would receive, so
//! tests can assert on field keys and not only on the typed record.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use ad_core::ports::{ProfileError, ProfileStorePort};
use ad_core::user::USERS_COLLECTION;
use ad_core::{SubjectId, UserProfile};

type Document = Map<String, Value>;

#[derive(Default)]
struct Collection {
    documents: HashMap<String, Document>,
    /// Returned by the next write instead of storing anything.
    fail_next_write: Option<ProfileError>,
}

#[derive(Default)]
pub struct InMemoryProfileStore {
    collection: Mutex<Collection>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next create or update fail with `err`.
    pub fn fail_next_write(&self, err: ProfileError) {
        self.lock().fail_next_write = Some(err);
    }

    /// Raw stored document for `uid`.
    pub fn document(&self, uid: &SubjectId) -> Option<Document> {
        self.lock().documents.get(uid.as_str()).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Collection> {
        self.collection
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ProfileStorePort for InMemoryProfileStore {
    async fn create_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let mut collection = self.lock();
        if let Some(err) = collection.fail_next_write.take() {
            return Err(err);
        }
        collection
            .documents
            .insert(profile.uid.to_string(), profile.to_document());
        debug!(collection = USERS_COLLECTION, uid = %profile.uid, "document written");
        Ok(())
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let mut collection = self.lock();
        if let Some(err) = collection.fail_next_write.take() {
            return Err(err);
        }
        let Some(existing) = collection.documents.get_mut(profile.uid.as_str()) else {
            return Err(ProfileError::NotFound(profile.uid.clone()));
        };
        existing.extend(profile.to_document());
        debug!(collection = USERS_COLLECTION, uid = %profile.uid, "document updated");
        Ok(())
    }

    async fn delete_profile(&self, uid: &SubjectId) -> Result<(), ProfileError> {
        self.lock().documents.remove(uid.as_str());
        Ok(())
    }

    async fn get_profile(&self, uid: &SubjectId) -> Result<Option<UserProfile>, ProfileError> {
        Ok(self
            .lock()
            .documents
            .get(uid.as_str())
            .map(UserProfile::from_document))
    }
}
