//! # Client Service
//!
//! Application service for clients. Follows the uniform
//! validate-then-persist protocol; lookups return `Ok(None)` for missing
//! ids rather than failing (unlike appointments - see
//! [`crate::appointment`]).

use vetdesk_core::validation::validate_client;
use vetdesk_core::Client;
use vetdesk_db::repository::Repository;
use vetdesk_db::ClientRepository;

use crate::error::{DomainError, DomainResult};

/// Application service for client records.
#[derive(Debug, Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    /// Creates a new ClientService over the given store.
    pub fn new(repo: ClientRepository) -> Self {
        ClientService { repo }
    }

    /// Validates and persists a new client.
    pub async fn save(&self, client: &Client) -> DomainResult<()> {
        validate_client(client)?;
        self.repo
            .create(client)
            .await
            .map_err(DomainError::store("failed to save client"))
    }

    /// Returns every client.
    pub async fn list_all(&self) -> DomainResult<Vec<Client>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list clients"))
    }

    /// Looks up a client by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<Client>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up client"))
    }

    /// Re-validates and overwrites an existing client.
    pub async fn update(&self, client: &Client) -> DomainResult<()> {
        validate_client(client)?;
        self.repo
            .update(client)
            .await
            .map_err(DomainError::store("failed to update client"))
    }

    /// Deletes a client unconditionally; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete client"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vetdesk_db::{Database, DbConfig};

    fn client(name: &str) -> Client {
        Client {
            id: 0,
            name: name.to_string(),
            phone: "555-0101".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_client_is_silently_absent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = ClientService::new(db.clients());

        // No DomainError here - the appointment service promotes absence
        // to a failure, this one does not.
        let found = service.find_by_id(9999).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_invalid_client_never_reaches_the_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = ClientService::new(db.clients());

        let err = service.save(&client("   ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_wrapped_with_context() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = ClientService::new(db.clients());

        // Simulate a transport failure: every statement after close fails.
        db.close().await;

        let err = service.save(&client("Ada Vance")).await.unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("failed to save client"), "{message}");
        // The original store failure's text is preserved in the message.
        assert!(message.contains("pool is closed"), "{message}");
    }
}
