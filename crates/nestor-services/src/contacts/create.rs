//! Create contact service

use nestor_contracts::{ContactContract, Contract};
use nestor_core::{ServiceOutcome, ServiceResult};
use nestor_models::{Contact, CreateContactDto};
use nestor_store::ContactStore;
use tracing::info;

/// Creates a contact once the contract passes.
pub struct CreateContactService {
    contacts: ContactStore,
}

impl CreateContactService {
    pub fn new(contacts: ContactStore) -> Self {
        Self { contacts }
    }

    pub async fn call(&self, dto: CreateContactDto) -> ServiceOutcome<Contact> {
        let contact = Contact::from(dto);

        if let Err(errors) = ContactContract::new().validate(&contact) {
            return Ok(ServiceResult::failure(errors));
        }

        let contact = self.contacts.save(contact).await?;
        info!(contact_id = %contact.id, "contact created");

        Ok(ServiceResult::success(contact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::ContactRole;
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    fn service() -> CreateContactService {
        CreateContactService::new(ContactStore::new(Arc::new(MemoryStore::new())))
    }

    fn dto(name: &str) -> CreateContactDto {
        CreateContactDto {
            name: name.into(),
            role: Some(ContactRole::Client),
            email: None,
            phone: None,
            vat_number: None,
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_creates_contact_and_assigns_id() {
        let service = service();

        let result = service.call(dto("Maria Papadopoulou")).await.unwrap();
        assert!(result.is_success());

        let contact = result.take_result().unwrap();
        assert!(!contact.id.is_empty());
        assert_eq!(contact.name, "Maria Papadopoulou");
    }

    #[tokio::test]
    async fn test_rejects_invalid_vat_number() {
        let service = service();

        let mut invalid = dto("Nikos");
        invalid.vat_number = Some("12345".into());

        let result = service.call(invalid).await.unwrap();
        assert!(result.is_failure());
        assert!(result.errors().has_error("vat_number"));
    }

    #[tokio::test]
    async fn test_rejects_blank_name() {
        let result = service().call(dto("")).await.unwrap();
        assert!(result.is_failure());
        assert!(result.errors().has_error("name"));
    }
}
