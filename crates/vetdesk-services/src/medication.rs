//! # Medication Service

use vetdesk_core::validation::validate_medication;
use vetdesk_core::{BestSellingMedication, Medication};
use vetdesk_db::repository::Repository;
use vetdesk_db::MedicationRepository;

use crate::error::{DomainError, DomainResult};

/// Application service for the medication catalog.
#[derive(Debug, Clone)]
pub struct MedicationService {
    repo: MedicationRepository,
}

impl MedicationService {
    /// Creates a new MedicationService over the given store.
    pub fn new(repo: MedicationRepository) -> Self {
        MedicationService { repo }
    }

    /// Validates and persists a new medication.
    pub async fn save(&self, medication: &Medication) -> DomainResult<()> {
        validate_medication(medication)?;
        self.repo
            .create(medication)
            .await
            .map_err(DomainError::store("failed to save medication"))
    }

    /// Returns every medication.
    pub async fn list_all(&self) -> DomainResult<Vec<Medication>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list medications"))
    }

    /// Looks up a medication by id. Absence is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<Medication>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up medication"))
    }

    /// Re-validates and overwrites an existing medication.
    pub async fn update(&self, medication: &Medication) -> DomainResult<()> {
        validate_medication(medication)?;
        self.repo
            .update(medication)
            .await
            .map_err(DomainError::store("failed to update medication"))
    }

    /// Deletes a medication unconditionally; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete medication"))
    }

    /// Best-selling medications report: units billed across all
    /// invoices, descending.
    pub async fn best_sellers(&self) -> DomainResult<Vec<BestSellingMedication>> {
        self.repo
            .best_sellers()
            .await
            .map_err(DomainError::store("failed to load best-selling medications"))
    }
}
