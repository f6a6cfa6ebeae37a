//! # Appointment Service
//!
//! Application service for appointments. This is the one service that
//! promotes "not found" to a [`DomainError`], both on lookups and before
//! deletes - the scheduling forms rely on that behavior, so it is kept
//! even though the sibling services return `Ok(None)` instead.

use chrono::Utc;

use vetdesk_core::validation::validate_appointment;
use vetdesk_core::Appointment;
use vetdesk_db::repository::Repository;
use vetdesk_db::AppointmentRepository;

use crate::error::{DomainError, DomainResult};

/// Application service for appointment records.
#[derive(Debug, Clone)]
pub struct AppointmentService {
    repo: AppointmentRepository,
}

impl AppointmentService {
    /// Creates a new AppointmentService over the given store.
    pub fn new(repo: AppointmentRepository) -> Self {
        AppointmentService { repo }
    }

    /// Validates and persists a new appointment.
    ///
    /// Validation runs against the wall clock: anything scheduled before
    /// one minute from now is rejected before the store is touched.
    pub async fn save(&self, appointment: &Appointment) -> DomainResult<()> {
        validate_appointment(appointment, Utc::now())?;
        self.repo
            .create(appointment)
            .await
            .map_err(DomainError::store("failed to save appointment"))
    }

    /// Returns every appointment.
    pub async fn list_all(&self) -> DomainResult<Vec<Appointment>> {
        self.repo
            .list_all()
            .await
            .map_err(DomainError::store("failed to list appointments"))
    }

    /// Looks up an appointment by id. A missing id is a `DomainError`,
    /// not an absent result.
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Appointment> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up appointment"))?
            .ok_or_else(|| DomainError::not_found("appointment", id))
    }

    /// Re-validates and overwrites an existing appointment.
    ///
    /// The full rule set runs again here: a past `scheduled_at` is
    /// rejected on update exactly as on save.
    pub async fn update(&self, appointment: &Appointment) -> DomainResult<()> {
        validate_appointment(appointment, Utc::now())?;
        self.repo
            .update(appointment)
            .await
            .map_err(DomainError::store("failed to update appointment"))
    }

    /// Deletes an appointment after checking it exists; deleting a
    /// missing id is a `DomainError`.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::store("failed to look up appointment"))?
            .ok_or_else(|| DomainError::not_found("appointment", id))?;

        self.repo
            .delete(id)
            .await
            .map_err(DomainError::store("failed to delete appointment"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
