//! In-memory document store
//!
//! Backs the bundled server and every test. Collections are id-sorted maps
//! behind one async lock; listing order is therefore deterministic.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::DocumentStore;

type Collection = BTreeMap<String, Value>;

/// In-memory `DocumentStore` implementation
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, |c| c.len())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn list(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn put(&self, collection: &str, mut document: Value) -> StoreResult<Value> {
        let id = match document.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let object = document.as_object_mut().ok_or_else(|| {
            StoreError::Backend(format!("document for {} is not a JSON object", collection))
        })?;
        object.insert("id".to_string(), Value::String(id.clone()));

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document.clone());

        debug!(collection, id = %id, "document stored");
        Ok(document)
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
            debug!(collection, id, "document deleted");
        }
        Ok(())
    }

    async fn exists(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map_or(false, |docs| docs.contains_key(id)))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_assigns_id_when_missing() {
        let store = MemoryStore::new();
        let stored = store
            .put("contacts", json!({"name": "Maria"}))
            .await
            .unwrap();

        let id = stored["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert!(store.exists("contacts", id).await.unwrap());
    }

    #[tokio::test]
    async fn test_put_keeps_explicit_id() {
        let store = MemoryStore::new();
        let stored = store
            .put("contacts", json!({"id": "c-1", "name": "Maria"}))
            .await
            .unwrap();

        assert_eq!(stored["id"], "c-1");
        let fetched = store.get("contacts", "c-1").await.unwrap().unwrap();
        assert_eq!(fetched["name"], "Maria");
    }

    #[tokio::test]
    async fn test_put_replaces_existing_document() {
        let store = MemoryStore::new();
        store
            .put("contacts", json!({"id": "c-1", "name": "Old"}))
            .await
            .unwrap();
        store
            .put("contacts", json!({"id": "c-1", "name": "New"}))
            .await
            .unwrap();

        let fetched = store.get("contacts", "c-1").await.unwrap().unwrap();
        assert_eq!(fetched["name"], "New");
        assert_eq!(store.count("contacts").await, 1);
    }

    #[tokio::test]
    async fn test_list_is_id_sorted() {
        let store = MemoryStore::new();
        for id in ["c-3", "c-1", "c-2"] {
            store
                .put("contacts", json!({"id": id, "name": id}))
                .await
                .unwrap();
        }

        let listed = store.list("contacts").await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["c-1", "c-2", "c-3"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store
            .put("contacts", json!({"id": "c-1", "name": "Maria"}))
            .await
            .unwrap();

        store.delete("contacts", "c-1").await.unwrap();
        store.delete("contacts", "c-1").await.unwrap();
        assert!(!store.exists("contacts", "c-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_non_object_document_rejected() {
        let store = MemoryStore::new();
        let result = store.put("contacts", json!("not a document")).await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get("contacts", "ghost").await.unwrap().is_none());
        assert!(store.list("ghosts").await.unwrap().is_empty());
    }
}
