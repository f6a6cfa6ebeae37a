//! # Clinic Service Repository
//!
//! Database operations for the clinic-service catalog (consultations,
//! surgeries, grooming, ...).

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;
use vetdesk_core::ClinicService;

/// Repository for clinic-service database operations.
#[derive(Debug, Clone)]
pub struct ClinicServiceRepository {
    pool: SqlitePool,
}

impl ClinicServiceRepository {
    /// Creates a new ClinicServiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClinicServiceRepository { pool }
    }

    /// Counts catalog entries (used by the seed binary's guard).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clinic_services")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn map_service(row: &SqliteRow) -> Result<ClinicService, sqlx::Error> {
    Ok(ClinicService {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price_cents: row.try_get("price_cents")?,
    })
}

#[async_trait]
impl Repository<ClinicService> for ClinicServiceRepository {
    async fn create(&self, service: &ClinicService) -> StoreResult<()> {
        debug!(name = %service.name, "Inserting clinic service");

        sqlx::query(
            "INSERT INTO clinic_services (name, description, price_cents) VALUES (?1, ?2, ?3)",
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.price_cents)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<ClinicService>> {
        let rows = sqlx::query("SELECT id, name, description, price_cents FROM clinic_services")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(map_service)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<ClinicService>> {
        let row = sqlx::query(
            "SELECT id, name, description, price_cents FROM clinic_services WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(map_service)
            .transpose()
            .map_err(Into::into)
    }

    async fn update(&self, service: &ClinicService) -> StoreResult<()> {
        sqlx::query(
            "UPDATE clinic_services SET name = ?1, description = ?2, price_cents = ?3 \
             WHERE id = ?4",
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.price_cents)
        .bind(service.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM clinic_services WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
