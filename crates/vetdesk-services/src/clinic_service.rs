//! # Clinic Service Catalog Service
//!
//! Application service for the clinic-service catalog, same template as
//! the other entity services.

use vetdesk_core::validation::validate_clinic_service;
use vetdesk_core::ClinicService;
use vetdesk_db::repository::Repository;
use vetdesk_db::ClinicServiceRepository;

use crate::error::{DomainError, DomainResult};

/// Application service for clinic-service catalog records.
#[derive(Debug, Clone)]
pub struct ClinicServiceService {
    repo: ClinicServiceRepository,
}

impl ClinicServiceService {
    /// Creates a new ClinicServiceService over the given store.
    pub fn new(repo: ClinicServiceRepository) -> Self {
        ClinicServiceService { repo }
    }

    /// Validates and persists a new clinic service.
    pub async fn save(&self, service: &ClinicService) -> DomainResult<()> {
        validate_clinic_service(service)?;
        self.repo
            .create(service)
            .await
            .map_err(DomainError::store("failed to save clinic service"))
    }

    /// Returns every clinic service.
    pub async fn list_all(&self) -> DomainResult<Vec<ClinicService>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list clinic services"))
    }

    /// Looks up a clinic service by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<ClinicService>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up clinic service"))
    }

    /// Re-validates and overwrites an existing clinic service.
    pub async fn update(&self, service: &ClinicService) -> DomainResult<()> {
        validate_clinic_service(service)?;
        self.repo
            .update(service)
            .await
            .map_err(DomainError::store("failed to update clinic service"))
    }

    /// Deletes a clinic service unconditionally; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete clinic service"))
    }
}
