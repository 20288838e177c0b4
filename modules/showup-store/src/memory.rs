//! In-memory entity store, used by tests and local replay.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use showup_common::EntityKind;

use crate::error::StoreError;
use crate::store::EntityStore;

/// `HashMap` behind a mutex. Read-after-write consistent; the lock is held
/// only for the duration of a single load or save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entities: Mutex<HashMap<(EntityKind, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored entities across all namespaces.
    pub fn len(&self) -> usize {
        self.entities
            .lock()
            .map(|entities| entities.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored entities in one namespace.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities
            .lock()
            .map(|entities| entities.keys().filter(|(k, _)| *k == kind).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn load(&self, kind: EntityKind, key: &str) -> Result<Option<Value>, StoreError> {
        let entities = self
            .entities
            .lock()
            .map_err(|_| StoreError::Backend("entity map lock poisoned".to_string()))?;
        Ok(entities.get(&(kind, key.to_string())).cloned())
    }

    async fn save(&self, kind: EntityKind, key: &str, entity: Value) -> Result<(), StoreError> {
        let mut entities = self
            .entities
            .lock()
            .map_err(|_| StoreError::Backend("entity map lock poisoned".to_string()))?;
        entities.insert((kind, key.to_string()), entity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load_as, save_as};
    use showup_common::{Account, Address};

    #[tokio::test]
    async fn absent_key_loads_none() {
        let store = MemoryStore::new();
        let loaded = store.load(EntityKind::Account, "0xmissing").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn typed_round_trip() {
        let store = MemoryStore::new();
        let account = Account::new(Address::new([5; 20]));
        let key = account.address.to_string();

        save_as(&store, EntityKind::Account, &key, &account)
            .await
            .unwrap();

        let loaded: Account = load_as(&store, EntityKind::Account, &key)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded, account);
    }

    #[tokio::test]
    async fn same_key_in_different_namespaces_does_not_collide() {
        let store = MemoryStore::new();
        store
            .save(EntityKind::Rsvp, "shared", serde_json::json!({"a": 1}))
            .await
            .unwrap();
        store
            .save(EntityKind::Confirmation, "shared", serde_json::json!({"b": 2}))
            .await
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.count(EntityKind::Rsvp), 1);
    }

    #[tokio::test]
    async fn save_overwrites() {
        let store = MemoryStore::new();
        store
            .save(EntityKind::Event, "k", serde_json::json!({"v": 1}))
            .await
            .unwrap();
        store
            .save(EntityKind::Event, "k", serde_json::json!({"v": 2}))
            .await
            .unwrap();

        let loaded = store.load(EntityKind::Event, "k").await.unwrap().unwrap();
        assert_eq!(loaded["v"], 2);
    }
}
