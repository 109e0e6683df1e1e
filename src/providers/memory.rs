//! In-memory transform store
//!
//! Keeps transform sets in a process-local map. Used by tests and as a
//! local default when no durable backend is configured; nothing survives
//! a restart.

use super::store::TransformStore;
use crate::domain::{Result, RevertKey, StoreError, TransformSet};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local [`TransformStore`] backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryTransformStore {
    sets: RwLock<HashMap<RevertKey, TransformSet>>,
}

impl InMemoryTransformStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transform sets
    pub async fn len(&self) -> usize {
        self.sets.read().await.len()
    }

    /// True when the store holds no transform sets
    pub async fn is_empty(&self) -> bool {
        self.sets.read().await.is_empty()
    }
}

#[async_trait]
impl TransformStore for InMemoryTransformStore {
    async fn put(&self, set: &TransformSet) -> Result<RevertKey> {
        let key = RevertKey::generate();
        self.sets.write().await.insert(key.clone(), set.clone());
        Ok(key)
    }

    async fn get(&self, key: &RevertKey) -> Result<TransformSet> {
        self.sets
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScrubError;

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let store = InMemoryTransformStore::new();
        let set = TransformSet::default();

        let key = store.put(&set).await.unwrap();
        let back = store.get(&key).await.unwrap();
        assert_eq!(back.transforms, set.transforms);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_key() {
        let store = InMemoryTransformStore::new();
        let key = RevertKey::generate();

        let result = store.get(&key).await;
        assert!(matches!(
            result,
            Err(ScrubError::Store(StoreError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_keys_are_unique_per_put() {
        let store = InMemoryTransformStore::new();
        let set = TransformSet::default();

        let a = store.put(&set).await.unwrap();
        let b = store.put(&set).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len().await, 2);
    }
}
