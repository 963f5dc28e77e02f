//! Shared application state
//!
//! One handle cloned into every handler: the document store, the loaded
//! configuration and the mounted report engine. Typed store views are
//! cheap wrappers over the shared store, so handlers build them on demand.

use std::sync::Arc;

use nestor_core::config::AppConfig;
use nestor_metrics::AlertWindow;
use nestor_reports::ReportEngine;
use nestor_store::{
    ContactStore, CustomListItemStore, CustomListStore, DocumentStore, MasterInterventionStore,
    OfferStore, ProjectStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<AppConfig>,
    pub report_engine: Arc<dyn ReportEngine>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        config: Arc<AppConfig>,
        report_engine: Arc<dyn ReportEngine>,
    ) -> Self {
        Self {
            store,
            config,
            report_engine,
        }
    }

    pub fn contacts(&self) -> ContactStore {
        ContactStore::new(self.store.clone())
    }

    pub fn projects(&self) -> ProjectStore {
        ProjectStore::new(self.store.clone())
    }

    pub fn offers(&self) -> OfferStore {
        OfferStore::new(self.store.clone())
    }

    pub fn master_interventions(&self) -> MasterInterventionStore {
        MasterInterventionStore::new(self.store.clone())
    }

    pub fn custom_lists(&self) -> CustomListStore {
        CustomListStore::new(self.store.clone())
    }

    pub fn list_items(&self) -> CustomListItemStore {
        CustomListItemStore::new(self.store.clone())
    }

    pub fn alert_window(&self) -> AlertWindow {
        AlertWindow::days(self.config.alerts.lookahead_days)
    }
}
