//! # Veterinarian Repository

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;
use vetdesk_core::Veterinarian;

/// Repository for veterinarian database operations.
#[derive(Debug, Clone)]
pub struct VeterinarianRepository {
    pool: SqlitePool,
}

impl VeterinarianRepository {
    /// Creates a new VeterinarianRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VeterinarianRepository { pool }
    }
}

fn map_veterinarian(row: &SqliteRow) -> Result<Veterinarian, sqlx::Error> {
    Ok(Veterinarian {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        specialty: row.try_get("specialty")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
    })
}

#[async_trait]
impl Repository<Veterinarian> for VeterinarianRepository {
    async fn create(&self, veterinarian: &Veterinarian) -> StoreResult<()> {
        debug!(name = %veterinarian.name, "Inserting veterinarian");

        sqlx::query(
            "INSERT INTO veterinarians (name, specialty, phone, email) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&veterinarian.name)
        .bind(&veterinarian.specialty)
        .bind(&veterinarian.phone)
        .bind(&veterinarian.email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Veterinarian>> {
        let rows = sqlx::query("SELECT id, name, specialty, phone, email FROM veterinarians")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(map_veterinarian)
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Veterinarian>> {
        let row = sqlx::query(
            "SELECT id, name, specialty, phone, email FROM veterinarians WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(map_veterinarian)
            .transpose()
            .map_err(Into::into)
    }

    async fn update(&self, veterinarian: &Veterinarian) -> StoreResult<()> {
        sqlx::query(
            "UPDATE veterinarians SET name = ?1, specialty = ?2, phone = ?3, email = ?4 \
             WHERE id = ?5",
        )
        .bind(&veterinarian.name)
        .bind(&veterinarian.specialty)
        .bind(&veterinarian.phone)
        .bind(&veterinarian.email)
        .bind(veterinarian.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM veterinarians WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
