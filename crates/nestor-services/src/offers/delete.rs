//! Delete offer service

use nestor_core::{ServiceOutcome, ServiceResult};
use nestor_store::OfferStore;
use tracing::info;

pub struct DeleteOfferService {
    offers: OfferStore,
}

impl DeleteOfferService {
    pub fn new(offers: OfferStore) -> Self {
        Self { offers }
    }

    pub async fn call(&self, id: &str) -> ServiceOutcome<()> {
        self.offers.require(id).await?;
        self.offers.delete(id).await?;
        info!(offer_id = %id, "offer deleted");

        Ok(ServiceResult::success(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::Offer;
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_deletes_offer() {
        let offers = OfferStore::new(Arc::new(MemoryStore::new()));
        let offer = offers.save(Offer::new("c-supplier")).await.unwrap();

        let service = DeleteOfferService::new(offers.clone());
        let result = service.call(&offer.id).await.unwrap();
        assert!(result.is_success());
        assert!(offers.get(&offer.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_offer_is_not_found() {
        let service = DeleteOfferService::new(OfferStore::new(Arc::new(MemoryStore::new())));
        let err = service.call("missing").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
