//! In-memory mock storage backend.

use async_trait::async_trait;
use docgate_storage::{Storage, StorageError, StorageResult};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// Storage mock: canned URLs, an in-memory object set for `exists`, and a
/// record of deleted keys.
#[derive(Default)]
pub struct MockStorage {
    existing: Mutex<HashSet<String>>,
    deleted: Mutex<Vec<String>>,
    fail_deletes: Mutex<bool>,
}

impl MockStorage {
    pub fn insert_object(&self, key: &str) {
        self.existing.lock().unwrap().insert(key.to_string());
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn fail_deletes(&self) {
        *self.fail_deletes.lock().unwrap() = true;
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://mock-store.local/put/{}?contentType={}&expires={}",
            key,
            content_type,
            expires_in.as_secs()
        ))
    }

    async fn presigned_get_url(
        &self,
        key: &str,
        expires_in: Duration,
        content_disposition: Option<&str>,
    ) -> StorageResult<String> {
        let disposition = content_disposition
            .map(|d| format!("&disposition={}", d))
            .unwrap_or_default();
        Ok(format!(
            "https://mock-store.local/get/{}?expires={}{}",
            key,
            expires_in.as_secs(),
            disposition
        ))
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.existing.lock().unwrap().contains(key))
    }

    async fn delete_objects(&self, keys: &[String]) -> StorageResult<()> {
        if *self.fail_deletes.lock().unwrap() {
            return Err(StorageError::DeleteFailed("simulated failure".to_string()));
        }
        self.deleted.lock().unwrap().extend_from_slice(keys);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://docgate-test.s3.us-east-1.amazonaws.com/{}", key)
    }
}
