//! # Pet Service

use vetdesk_core::validation::validate_pet;
use vetdesk_core::Pet;
use vetdesk_db::repository::Repository;
use vetdesk_db::PetRepository;

use crate::error::{DomainError, DomainResult};

/// Application service for pet records.
///
/// `find_by_id` results carry the owning client attached by the store;
/// `list_all` results do not (the listing stays one statement).
#[derive(Debug, Clone)]
pub struct PetService {
    repo: PetRepository,
}

impl PetService {
    /// Creates a new PetService over the given store.
    pub fn new(repo: PetRepository) -> Self {
        PetService { repo }
    }

    /// Validates and persists a new pet.
    pub async fn save(&self, pet: &Pet) -> DomainResult<()> {
        validate_pet(pet)?;
        self.repo
            .create(pet)
            .await
            .map_err(DomainError::store("failed to save pet"))
    }

    /// Returns every pet, without owner back-references.
    pub async fn list_all(&self) -> DomainResult<Vec<Pet>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list pets"))
    }

    /// Looks up a pet by id, with its owner attached. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<Pet>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up pet"))
    }

    /// Re-validates and overwrites an existing pet.
    pub async fn update(&self, pet: &Pet) -> DomainResult<()> {
        validate_pet(pet)?;
        self.repo
            .update(pet)
            .await
            .map_err(DomainError::store("failed to update pet"))
    }

    /// Deletes a pet unconditionally; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete pet"))
    }
}
