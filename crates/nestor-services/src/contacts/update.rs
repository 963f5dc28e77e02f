//! Update contact service

use nestor_contracts::{ContactContract, Contract};
use nestor_core::{ServiceOutcome, ServiceResult};
use nestor_models::{Contact, UpdateContactDto};
use nestor_store::ContactStore;
use tracing::info;

/// Applies a partial update to a stored contact.
pub struct UpdateContactService {
    contacts: ContactStore,
}

impl UpdateContactService {
    pub fn new(contacts: ContactStore) -> Self {
        Self { contacts }
    }

    pub async fn call(&self, id: &str, dto: UpdateContactDto) -> ServiceOutcome<Contact> {
        let mut contact = self.contacts.require(id).await?;
        dto.apply_to(&mut contact);

        if let Err(errors) = ContactContract::new().validate(&contact) {
            return Ok(ServiceResult::failure(errors));
        }

        let contact = self.contacts.save(contact).await?;
        info!(contact_id = %contact.id, "contact updated");

        Ok(ServiceResult::success(contact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::ContactRole;
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    fn store() -> ContactStore {
        ContactStore::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_updates_named_fields_only() {
        let contacts = store();
        let mut contact = Contact::new("Old Name", ContactRole::Supplier);
        contact.phone = Some("+30 210 0000000".into());
        let contact = contacts.save(contact).await.unwrap();

        let service = UpdateContactService::new(contacts.clone());
        let dto = UpdateContactDto {
            name: Some("New Name".into()),
            ..Default::default()
        };

        let result = service.call(&contact.id, dto).await.unwrap();
        assert!(result.is_success());

        let updated = contacts.require(&contact.id).await.unwrap();
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.role, ContactRole::Supplier);
        assert_eq!(updated.phone.as_deref(), Some("+30 210 0000000"));
    }

    #[tokio::test]
    async fn test_unknown_contact_is_not_found() {
        let service = UpdateContactService::new(store());
        let err = service
            .call("missing", UpdateContactDto::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_document_untouched() {
        let contacts = store();
        let contact = contacts
            .save(Contact::new("Nikos", ContactRole::Client))
            .await
            .unwrap();

        let service = UpdateContactService::new(contacts.clone());
        let dto = UpdateContactDto {
            email: Some("not-an-email".into()),
            ..Default::default()
        };

        let result = service.call(&contact.id, dto).await.unwrap();
        assert!(result.is_failure());
        assert!(result.errors().has_error("email"));

        let stored = contacts.require(&contact.id).await.unwrap();
        assert!(stored.email.is_none());
    }
}
