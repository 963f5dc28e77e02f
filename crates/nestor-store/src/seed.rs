//! YAML seed loading
//!
//! The bundled server boots an empty in-memory store; a seed file fills it
//! with demo or test data. Seeds deserialize through the model types, so
//! they get the same leniency and shape guarantees as any other document.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use nestor_core::Document;
use nestor_models::{Contact, CustomList, CustomListItem, MasterIntervention, Offer, Project};

use crate::error::StoreResult;
use crate::store::DocumentStore;

/// Top-level seed file structure; every section is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub contacts: Vec<Contact>,
    pub master_interventions: Vec<MasterIntervention>,
    pub projects: Vec<Project>,
    pub offers: Vec<Offer>,
    pub custom_lists: Vec<CustomList>,
    pub custom_list_items: Vec<CustomListItem>,
}

/// Counts of seeded documents, by collection
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub contacts: usize,
    pub master_interventions: usize,
    pub projects: usize,
    pub offers: usize,
    pub custom_lists: usize,
    pub custom_list_items: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.contacts
            + self.master_interventions
            + self.projects
            + self.offers
            + self.custom_lists
            + self.custom_list_items
    }
}

/// Parse a YAML seed document
pub fn parse_seed(yaml: &str) -> StoreResult<SeedData> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a seed file into the store
pub async fn load_seed_file(store: &dyn DocumentStore, path: &Path) -> StoreResult<SeedSummary> {
    let yaml = tokio::fs::read_to_string(path).await?;
    let seed = parse_seed(&yaml)?;
    let summary = apply_seed(store, seed).await?;
    info!(path = %path.display(), documents = summary.total(), "seed loaded");
    Ok(summary)
}

/// Write parsed seed data into the store
pub async fn apply_seed(store: &dyn DocumentStore, seed: SeedData) -> StoreResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for contact in seed.contacts {
        store
            .put(Contact::COLLECTION, serde_json::to_value(&contact)?)
            .await?;
        summary.contacts += 1;
    }
    for master in seed.master_interventions {
        store
            .put(
                MasterIntervention::COLLECTION,
                serde_json::to_value(&master)?,
            )
            .await?;
        summary.master_interventions += 1;
    }
    for project in seed.projects {
        store
            .put(Project::COLLECTION, serde_json::to_value(&project)?)
            .await?;
        summary.projects += 1;
    }
    for offer in seed.offers {
        store
            .put(Offer::COLLECTION, serde_json::to_value(&offer)?)
            .await?;
        summary.offers += 1;
    }
    for list in seed.custom_lists {
        store
            .put(CustomList::COLLECTION, serde_json::to_value(&list)?)
            .await?;
        summary.custom_lists += 1;
    }
    for item in seed.custom_list_items {
        store
            .put(CustomListItem::COLLECTION, serde_json::to_value(&item)?)
            .await?;
        summary.custom_list_items += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    const SAMPLE: &str = r#"
contacts:
  - id: c-maria
    name: Maria Papadopoulou
    role: client
    email: maria@example.gr
projects:
  - id: p-athens
    title: Athens retrofit
    contactId: c-maria
    status: in-progress
    interventions:
      - id: pi-1
        masterId: mi-ins
        title: Roof insulation
        stages:
          - id: st-1
            title: Survey
            status: completed
        subInterventions:
          - id: si-1
            title: Mineral wool
            quantity: 40
            unitPrice: 12.5
"#;

    #[test]
    fn test_parse_sample() {
        let seed = parse_seed(SAMPLE).unwrap();
        assert_eq!(seed.contacts.len(), 1);
        assert_eq!(seed.projects.len(), 1);
        assert_eq!(seed.projects[0].interventions[0].stages.len(), 1);
        assert!(seed.offers.is_empty());
    }

    #[tokio::test]
    async fn test_apply_seed_populates_store() {
        let store = MemoryStore::new();
        let summary = apply_seed(&store, parse_seed(SAMPLE).unwrap())
            .await
            .unwrap();

        assert_eq!(summary.contacts, 1);
        assert_eq!(summary.projects, 1);
        assert_eq!(summary.total(), 2);
        assert!(store.exists("projects", "p-athens").await.unwrap());
        assert!(store.exists("contacts", "c-maria").await.unwrap());
    }

    #[test]
    fn test_empty_seed_is_valid() {
        let seed = parse_seed("{}").unwrap();
        assert!(seed.contacts.is_empty());
    }
}
