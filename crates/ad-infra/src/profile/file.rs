//! File-based profile store
//!
//! Persists each profile as a pretty-printed JSON document at
//! `<base_dir>/users/<uid>.json`, using the store's document keys.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use ad_core::ports::{ProfileError, ProfileStorePort};
use ad_core::user::USERS_COLLECTION;
use ad_core::{SubjectId, UserProfile};

pub const DEFAULT_PROFILE_EXTENSION: &str = "json";

pub struct FileProfileStore {
    collection_dir: PathBuf,
}

impl FileProfileStore {
    /// Store documents under `base_dir/users`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            collection_dir: base_dir.into().join(USERS_COLLECTION),
        }
    }

    pub fn collection_dir(&self) -> &Path {
        &self.collection_dir
    }

    fn document_path(&self, uid: &SubjectId) -> Result<PathBuf, ProfileError> {
        let name = uid.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(ProfileError::Rejected(format!("invalid profile id: {name:?}")));
        }
        Ok(self
            .collection_dir
            .join(format!("{name}.{DEFAULT_PROFILE_EXTENSION}")))
    }

    async fn read_document(&self, path: &Path) -> Result<Option<Map<String, Value>>, ProfileError> {
        if !fs::try_exists(path).await.map_err(storage_err)? {
            return Ok(None);
        }

        let content = fs::read_to_string(path).await.map_err(storage_err)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(doc)) => Ok(Some(doc)),
            Ok(_) => Err(ProfileError::Storage(format!(
                "profile document is not an object: {}",
                path.display()
            ))),
            Err(e) => Err(ProfileError::Storage(format!(
                "Failed to parse profile document: {e}"
            ))),
        }
    }

    async fn write_document(
        &self,
        path: &Path,
        doc: &Map<String, Value>,
    ) -> Result<(), ProfileError> {
        fs::create_dir_all(&self.collection_dir)
            .await
            .map_err(storage_err)?;

        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| ProfileError::Storage(format!("Failed to serialize profile: {e}")))?;

        let mut file = fs::File::create(path).await.map_err(storage_err)?;
        file.write_all(json.as_bytes()).await.map_err(storage_err)?;
        file.sync_all().await.map_err(storage_err)?;
        Ok(())
    }
}

fn storage_err(err: std::io::Error) -> ProfileError {
    warn!(error = %err, "profile file I/O failed");
    ProfileError::Storage(err.to_string())
}

#[async_trait]
impl ProfileStorePort for FileProfileStore {
    async fn create_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let path = self.document_path(&profile.uid)?;
        self.write_document(&path, &profile.to_document()).await?;
        debug!(path = %path.display(), "profile document written");
        Ok(())
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let path = self.document_path(&profile.uid)?;
        let Some(mut doc) = self.read_document(&path).await? else {
            return Err(ProfileError::NotFound(profile.uid.clone()));
        };
        doc.extend(profile.to_document());
        self.write_document(&path, &doc).await?;
        debug!(path = %path.display(), "profile document updated");
        Ok(())
    }

    async fn delete_profile(&self, uid: &SubjectId) -> Result<(), ProfileError> {
        let path = self.document_path(uid)?;
        if fs::try_exists(&path).await.map_err(storage_err)? {
            fs::remove_file(&path).await.map_err(storage_err)?;
        }
        Ok(())
    }

    async fn get_profile(&self, uid: &SubjectId) -> Result<Option<UserProfile>, ProfileError> {
        let path = self.document_path(uid)?;
        Ok(self
            .read_document(&path)
            .await?
            .map(|doc| UserProfile::from_document(&doc)))
    }
}
