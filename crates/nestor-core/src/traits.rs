//! Common traits implemented by the document models

use chrono::{DateTime, Utc};

/// Identifier type used across the document store.
/// Seed data uses human-readable slugs, runtime creation uses UUIDs.
pub type DocId = String;

/// Trait for documents with an identifier
pub trait Identifiable {
    fn id(&self) -> &DocId;
}

/// Trait for documents with creation/update tracking
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn touch(&mut self);
}

/// Trait implemented by every top-level document in the store
pub trait Document: Identifiable + Send + Sync {
    /// Collection name the document is stored under
    const COLLECTION: &'static str;
    /// Human-readable type name used in errors
    const TYPE_NAME: &'static str;
}
