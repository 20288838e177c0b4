//! The `EntityStore` trait and typed load/save helpers.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use showup_common::EntityKind;

use crate::error::StoreError;

/// Load-by-key / save-by-key over JSON-shaped entities.
///
/// `save` overwrites unconditionally; idempotence and check-then-create
/// discipline live in the projection layer, which applies signals one at a
/// time in source order.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn load(&self, kind: EntityKind, key: &str) -> Result<Option<Value>, StoreError>;

    async fn save(&self, kind: EntityKind, key: &str, entity: Value) -> Result<(), StoreError>;
}

/// Load an entity and decode it into its typed record.
pub async fn load_as<T: DeserializeOwned>(
    store: &dyn EntityStore,
    kind: EntityKind,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.load(kind, key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Encode a typed record and persist it.
pub async fn save_as<T: Serialize>(
    store: &dyn EntityStore,
    kind: EntityKind,
    key: &str,
    entity: &T,
) -> Result<(), StoreError> {
    store.save(kind, key, serde_json::to_value(entity)?).await
}
