//! # Appointment Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;
use vetdesk_core::Appointment;

/// Repository for appointment database operations.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: SqlitePool,
}

impl AppointmentRepository {
    /// Creates a new AppointmentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AppointmentRepository { pool }
    }
}

fn map_appointment(row: &SqliteRow) -> Result<Appointment, sqlx::Error> {
    Ok(Appointment {
        id: row.try_get("id")?,
        scheduled_at: row.try_get::<DateTime<Utc>, _>("scheduled_at")?,
        reason: row.try_get("reason")?,
        status: row.try_get("status")?,
        pet_id: row.try_get("pet_id")?,
        veterinarian_id: row.try_get("veterinarian_id")?,
    })
}

#[async_trait]
impl Repository<Appointment> for AppointmentRepository {
    async fn create(&self, appointment: &Appointment) -> StoreResult<()> {
        debug!(
            pet_id = appointment.pet_id,
            veterinarian_id = appointment.veterinarian_id,
            "Inserting appointment"
        );

        sqlx::query(
            "INSERT INTO appointments (scheduled_at, reason, status, pet_id, veterinarian_id) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(appointment.scheduled_at)
        .bind(&appointment.reason)
        .bind(&appointment.status)
        .bind(appointment.pet_id)
        .bind(appointment.veterinarian_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Appointment>> {
        let rows = sqlx::query(
            "SELECT id, scheduled_at, reason, status, pet_id, veterinarian_id FROM appointments",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(map_appointment)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Appointment>> {
        let row = sqlx::query(
            "SELECT id, scheduled_at, reason, status, pet_id, veterinarian_id \
             FROM appointments WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(map_appointment)
            .transpose()
            .map_err(Into::into)
    }

    async fn update(&self, appointment: &Appointment) -> StoreResult<()> {
        sqlx::query(
            "UPDATE appointments SET scheduled_at = ?1, reason = ?2, status = ?3, \
             pet_id = ?4, veterinarian_id = ?5 WHERE id = ?6",
        )
        .bind(appointment.scheduled_at)
        .bind(&appointment.reason)
        .bind(&appointment.status)
        .bind(appointment.pet_id)
        .bind(appointment.veterinarian_id)
        .bind(appointment.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM appointments WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
