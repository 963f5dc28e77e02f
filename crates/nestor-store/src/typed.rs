//! Typed access to store collections
//!
//! Wraps the raw JSON interface with the validated model types; every
//! document entering or leaving the store passes through serde here, which
//! is where absent nested collections become empty and draft cost fields
//! coerce. Each entity gets an alias plus the query helpers it needs.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use nestor_core::{Document, Timestamped};
use nestor_models::{Contact, CustomList, CustomListItem, MasterIntervention, Offer, Project};

use crate::error::{StoreError, StoreResult};
use crate::store::DocumentStore;

/// Typed wrapper over one collection
pub struct TypedStore<T> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for TypedStore<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _marker: PhantomData,
        }
    }
}

impl<T> TypedStore<T>
where
    T: Document + Timestamped + Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Fetch a document, failing with `NotFound` when absent
    pub async fn require(&self, id: &str) -> StoreResult<T> {
        self.get(id).await?.ok_or_else(|| StoreError::NotFound {
            entity: T::TYPE_NAME,
            id: id.to_string(),
        })
    }

    pub async fn list(&self) -> StoreResult<Vec<T>> {
        self.store
            .list(T::COLLECTION)
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    /// Persist a document, bumping its updated-at timestamp. The stored
    /// document is returned with its id assigned.
    pub async fn save(&self, mut document: T) -> StoreResult<T> {
        document.touch();
        let value = serde_json::to_value(&document)?;
        let stored = self.store.put(T::COLLECTION, value).await?;
        Ok(serde_json::from_value(stored)?)
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(T::COLLECTION, id).await
    }

    pub async fn exists(&self, id: &str) -> StoreResult<bool> {
        self.store.exists(T::COLLECTION, id).await
    }
}

pub type ContactStore = TypedStore<Contact>;
pub type ProjectStore = TypedStore<Project>;
pub type OfferStore = TypedStore<Offer>;
pub type MasterInterventionStore = TypedStore<MasterIntervention>;
pub type CustomListStore = TypedStore<CustomList>;
pub type CustomListItemStore = TypedStore<CustomListItem>;

impl TypedStore<Offer> {
    /// Offers currently assigned to a project
    pub async fn for_project(&self, project_id: &str) -> StoreResult<Vec<Offer>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|offer| offer.project_id.as_deref() == Some(project_id))
            .collect())
    }
}

impl TypedStore<Project> {
    /// Projects owned by a contact
    pub async fn for_contact(&self, contact_id: &str) -> StoreResult<Vec<Project>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|project| project.contact_id == contact_id)
            .collect())
    }
}

impl TypedStore<CustomListItem> {
    /// Items of one list, in position order
    pub async fn for_list(&self, list_id: &str) -> StoreResult<Vec<CustomListItem>> {
        let mut items: Vec<CustomListItem> = self
            .list()
            .await?
            .into_iter()
            .filter(|item| item.list_id == list_id)
            .collect();
        items.sort_by_key(|item| item.position);
        Ok(items)
    }
}
