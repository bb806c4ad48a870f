//! Object storage capability consumed by the transformation driver.

use core::future::Future;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{IngestError, Result};

/// Capability for reading and writing objects in a bucket-addressed store.
///
/// Production deployments implement this over their object storage SDK; the
/// driver only ever sees the trait, and the segmentation engine underneath
/// performs no I/O at all. `&self` receivers keep one implementation
/// shareable across files processed in parallel.
pub trait ObjectStore: Send + Sync {
    /// Reads the full body of `bucket`/`key`.
    fn get(&self, bucket: &str, key: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;

    /// Writes `body` to `bucket`/`key`, replacing any existing object.
    fn put(&self, bucket: &str, key: &str, body: Vec<u8>)
    -> impl Future<Output = Result<()>> + Send;
}

/// A simple in-memory store for testing and prototyping.
///
/// **Note**: everything lives in one map behind a lock; nothing persists.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: RwLock<BTreeMap<(String, String), Vec<u8>>>,
}

impl MemoryObjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an object without going through the async interface.
    pub fn seed(&self, bucket: &str, key: &str, body: impl Into<Vec<u8>>) {
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((bucket.to_string(), key.to_string()), body.into());
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemoryObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| IngestError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((bucket.to_string(), key.to_string()), body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let store = MemoryObjectStore::new();
        store.put("bucket", "key", b"payload".to_vec()).await.unwrap();

        let body = store.get("bucket", "key").await.unwrap();
        assert_eq!(body, b"payload");
    }

    #[tokio::test]
    async fn missing_object_is_an_error() {
        let store = MemoryObjectStore::new();
        let err = store.get("bucket", "nope").await.unwrap_err();
        assert!(matches!(err, IngestError::ObjectNotFound { .. }));
    }

    #[tokio::test]
    async fn put_replaces_existing_object() {
        let store = MemoryObjectStore::new();
        store.put("b", "k", b"one".to_vec()).await.unwrap();
        store.put("b", "k", b"two".to_vec()).await.unwrap();

        assert_eq!(store.get("b", "k").await.unwrap(), b"two");
        assert_eq!(store.len(), 1);
    }
}
