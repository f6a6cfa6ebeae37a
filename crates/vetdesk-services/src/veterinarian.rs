//! # Veterinarian Service

use vetdesk_core::validation::validate_veterinarian;
use vetdesk_core::Veterinarian;
use vetdesk_db::repository::Repository;
use vetdesk_db::VeterinarianRepository;

use crate::error::{DomainError, DomainResult};

/// Application service for veterinarian records.
#[derive(Debug, Clone)]
pub struct VeterinarianService {
    repo: VeterinarianRepository,
}

impl VeterinarianService {
    /// Creates a new VeterinarianService over the given store.
    pub fn new(repo: VeterinarianRepository) -> Self {
        VeterinarianService { repo }
    }

    /// Validates and persists a new veterinarian.
    pub async fn save(&self, veterinarian: &Veterinarian) -> DomainResult<()> {
        validate_veterinarian(veterinarian)?;
        self.repo
            .create(veterinarian)
            .await
            .map_err(DomainError::store("failed to save veterinarian"))
    }

    /// Returns every veterinarian.
    pub async fn list_all(&self) -> DomainResult<Vec<Veterinarian>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list veterinarians"))
    }

    /// Looks up a veterinarian by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<Veterinarian>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up veterinarian"))
    }

    /// Re-validates and overwrites an existing veterinarian.
    pub async fn update(&self, veterinarian: &Veterinarian) -> DomainResult<()> {
        validate_veterinarian(veterinarian)?;
        self.repo
            .update(veterinarian)
            .await
            .map_err(DomainError::store("failed to update veterinarian"))
    }

    /// Deletes a veterinarian unconditionally; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete veterinarian"))
    }
}
