//! Document store abstraction
//!
//! The application talks to its database through this trait alone. The
//! production deployment binds a managed document database; tests and the
//! bundled server use the in-memory implementation. Documents cross the
//! boundary as JSON values; the typed layer in `typed.rs` deserializes
//! them into validated models.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;

/// Unified get/set interface over collections of JSON documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by id; `None` when absent
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;

    /// List every document in a collection, ordered by id
    async fn list(&self, collection: &str) -> StoreResult<Vec<Value>>;

    /// Insert or replace a document. A missing or empty `id` field gets a
    /// generated one; the stored document is returned with its id set.
    async fn put(&self, collection: &str, document: Value) -> StoreResult<Value>;

    /// Delete a document; deleting an absent id is not an error
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// Check whether a document exists
    async fn exists(&self, collection: &str, id: &str) -> StoreResult<bool>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
